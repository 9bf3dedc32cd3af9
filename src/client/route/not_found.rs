use dioxus::prelude::*;

use crate::client::{component::page::ErrorPage, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        ErrorPage { status: Some(404), message: format!("No page at /{}", path) }
    }
}
