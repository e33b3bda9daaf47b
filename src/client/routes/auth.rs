use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use hotelfix::{
    model::auth::{LoginRequest, RegisterRequest},
    service::AppApi,
};

use crate::client::{components::Page, hooks::use_auth, router::Route, store::toast::Toasts};

#[component]
pub fn Login() -> Element {
    let api = use_context::<AppApi>();
    let auth = use_auth();
    let toasts = use_context::<Toasts>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };

            match api.login(&request).await {
                Ok(user) => {
                    toasts.success(format!("Welcome back, {}", user.full_name));
                    auth.set(Some(user));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::debug!("Login rejected: {}", e);
                    error.set(Some(e.to_string()));
                }
            }

            submitting.set(false);
        });
    };

    rsx!(
        Title { "Log in | Hotelfix" }
        Page { class: "flex items-center justify-center",
            form { class: "card bg-base-200 w-96", onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Log in" }
                    if let Some(message) = error() {
                        div { class: "alert alert-error", "{message}" }
                    }
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: submitting(),
                        if submitting() { "Logging in…" } else { "Log in" }
                    }
                    p { class: "text-sm",
                        "No account yet? "
                        Link { class: "link", to: Route::Register {}, "Register your hotel" }
                    }
                }
            }
        }
    )
}

#[component]
pub fn Register() -> Element {
    let api = use_context::<AppApi>();
    let auth = use_auth();
    let toasts = use_context::<Toasts>();
    let nav = use_navigator();

    let plans_api = api.clone();
    let plans = use_resource(move || {
        let api = plans_api.clone();
        async move { api.get_plans().await.unwrap_or_default() }
    });

    let mut full_name = use_signal(String::new);
    let mut hotel_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut plan_id = use_signal(|| None::<i64>);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            let request = RegisterRequest {
                email: email().trim().to_string(),
                password: password(),
                full_name: full_name().trim().to_string(),
                hotel_name: hotel_name().trim().to_string(),
                plan_id: plan_id(),
            };

            match api.register(&request).await {
                Ok(user) => {
                    toasts.success(format!("Welcome to Hotelfix, {}", user.full_name));
                    auth.set(Some(user));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            submitting.set(false);
        });
    };

    rsx!(
        Title { "Register | Hotelfix" }
        Page { class: "flex items-center justify-center",
            form { class: "card bg-base-200 w-96", onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Register your hotel" }
                    if let Some(message) = error() {
                        div { class: "alert alert-error", "{message}" }
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Your name",
                        required: true,
                        value: "{full_name}",
                        oninput: move |evt| full_name.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Hotel name",
                        required: true,
                        value: "{hotel_name}",
                        oninput: move |evt| hotel_name.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        minlength: "8",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    select {
                        class: "select w-full",
                        onchange: move |evt| plan_id.set(evt.value().parse().ok()),
                        option { value: "", "Choose a plan later" }
                        for plan in plans.read().clone().unwrap_or_default() {
                            option { key: "{plan.id}", value: "{plan.id}",
                                {format!("{} (€{:.2}/month)", plan.name, plan.monthly_price)}
                            }
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: submitting(),
                        if submitting() { "Creating account…" } else { "Create account" }
                    }
                }
            }
        }
    )
}
