use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{NotFound, ResetPassword};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[redirect("/", || Route::ResetPassword {})]
    #[route("/reset-password")]
    ResetPassword {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
