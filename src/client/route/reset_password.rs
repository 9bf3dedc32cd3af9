use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleCheck, FaLock},
    Icon,
};

use crate::client::{
    component::Page,
    constant::{MIN_PASSWORD_LENGTH, SITE_NAME},
    model::reset_password::{begin_submit, ResetPasswordForm, ResetView, SubmitAction},
};

#[cfg(feature = "web")]
use crate::client::{api::BrowserApiClient, model::reset_password::submit};

#[component]
pub fn ResetPassword() -> Element {
    let mut form = use_signal(ResetPasswordForm::default);
    let mut view = use_signal(ResetView::default);
    // Form being sent; `Some` doubles as the loading flag.
    let mut pending = use_signal(|| None::<ResetPasswordForm>);

    #[cfg(feature = "web")]
    let future = {
        let client = use_context::<Option<BrowserApiClient>>();
        use_resource(move || {
            let client = client.clone();
            async move {
                match (pending(), client) {
                    (Some(submitted), Some(client)) => Some(submit(&client, &submitted).await),
                    _ => None,
                }
            }
        })
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            view.set(result.clone());
            pending.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let in_flight = pending.read().is_some();
        match begin_submit(in_flight, &form.read()) {
            SubmitAction::Ignore => {}
            SubmitAction::Show(next) => view.set(next),
            SubmitAction::Send(current) => {
                view.set(ResetView::Form);
                pending.set(Some(current));
            }
        }
    };

    let on_reset_another = move |_: Event<MouseData>| {
        form.set(ResetPasswordForm::default());
        view.set(ResetView::Form);
    };

    let is_submitting = pending.read().is_some();
    let current_view = view();
    let error = current_view.error().map(str::to_string);

    rsx! {
        Title { "Reset Password | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            div {
                class: "card w-full max-w-md bg-base-200 shadow-xl",
                div {
                    class: "card-body gap-4",
                    match &current_view {
                        ResetView::Success { email } => rsx! {
                            div {
                                class: "flex flex-col items-center gap-4 text-center",
                                div {
                                    class: "text-success",
                                    Icon {
                                        width: 48,
                                        height: 48,
                                        icon: FaCircleCheck
                                    }
                                }
                                h2 {
                                    class: "card-title",
                                    "Password updated"
                                }
                                p {
                                    "The password for "
                                    span { class: "font-semibold", "{email}" }
                                    " has been reset. You can now sign in with your new password."
                                }
                                button {
                                    r#type: "button",
                                    class: "btn btn-outline",
                                    onclick: on_reset_another,
                                    "Reset another password"
                                }
                            }
                        },
                        ResetView::Form | ResetView::Error(_) => rsx! {
                            div {
                                class: "flex items-center gap-3",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaLock
                                }
                                h2 {
                                    class: "card-title",
                                    "Reset your password"
                                }
                            }
                            if let Some(message) = error {
                                div {
                                    role: "alert",
                                    class: "alert alert-error",
                                    span { "{message}" }
                                }
                            }
                            form {
                                class: "flex flex-col gap-4",
                                onsubmit: on_submit,
                                div {
                                    class: "form-control w-full flex flex-col gap-2",
                                    label {
                                        class: "label",
                                        span { class: "label-text", "Email" }
                                    }
                                    input {
                                        r#type: "email",
                                        class: "input input-bordered w-full",
                                        placeholder: "you@store.com",
                                        value: "{form().email}",
                                        oninput: move |evt| {
                                            form.write().email = evt.value();
                                        },
                                        disabled: is_submitting,
                                        required: true,
                                    }
                                }
                                div {
                                    class: "form-control w-full flex flex-col gap-2",
                                    label {
                                        class: "label",
                                        span { class: "label-text", "New password" }
                                    }
                                    input {
                                        r#type: "password",
                                        class: "input input-bordered w-full",
                                        placeholder: "At least {MIN_PASSWORD_LENGTH} characters",
                                        value: "{form().new_password}",
                                        oninput: move |evt| {
                                            form.write().new_password = evt.value();
                                        },
                                        disabled: is_submitting,
                                        required: true,
                                    }
                                }
                                div {
                                    class: "form-control w-full flex flex-col gap-2",
                                    label {
                                        class: "label",
                                        span { class: "label-text", "Confirm password" }
                                    }
                                    input {
                                        r#type: "password",
                                        class: "input input-bordered w-full",
                                        value: "{form().confirm_password}",
                                        oninput: move |evt| {
                                            form.write().confirm_password = evt.value();
                                        },
                                        disabled: is_submitting,
                                        required: true,
                                    }
                                }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: is_submitting,
                                    if is_submitting {
                                        span { class: "loading loading-spinner loading-sm" }
                                        "Resetting..."
                                    } else {
                                        "Reset password"
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
