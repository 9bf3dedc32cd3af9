use dioxus::prelude::*;

/// Page body offset below the fixed header; `class` is appended to the wrapper.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        section {
            class: "min-h-[calc(100vh-5rem)] pt-24 px-4 pb-8 {class}",
            {children}
        }
    )
}

/// Full-page error with an optional HTTP status heading.
#[component]
pub fn ErrorPage(status: Option<u16>, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col gap-4 items-center justify-center",
            if let Some(status) = status {
                p {
                    class: "text-5xl font-bold",
                    "{status}"
                }
            }
            p {
                class: "text-lg text-error",
                "{message}"
            }
        }
    )
}
