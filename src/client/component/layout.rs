use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

/// Shell shared by routed pages: fixed header, page body, footer.
#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "footer footer-center p-4 text-sm opacity-70",
            p { "{SITE_NAME}" }
        }
    })
}
