use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::page::ErrorPage, config::ClientConfig, constant::SITE_NAME, router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::BrowserApiClient;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(ClientConfig::from_build_env);

    // Pages reach the backend through this shared client; `None` only when the
    // build-time configuration is invalid, in which case no page is routed.
    #[cfg(feature = "web")]
    {
        let client = config.clone().ok().map(BrowserApiClient::browser);
        use_context_provider(move || client);
    }

    let body = match &config {
        Ok(_) => rsx! { Router::<Route> {} },
        Err(err) => {
            tracing::error!("Invalid client configuration: {}", err);
            rsx! { ErrorPage { status: None, message: err.to_string() } }
        }
    };

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Store management console for restaurants and grocers"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        {body}
    }
}
