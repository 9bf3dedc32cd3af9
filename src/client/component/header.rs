use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaBasketShopping, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::ResetPassword {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaBasketShopping
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
    })
}
