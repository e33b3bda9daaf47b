use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaScrewdriverWrench;
use dioxus_free_icons::Icon;
use hotelfix::{model::hotel::PlanDto, service::AppApi};

use crate::client::{components::Page, hooks::use_auth, router::Route};

#[component]
pub fn GetStartedButtons() -> Element {
    let auth = use_auth();

    rsx!(
        ul { class: "flex gap-2",
            if auth.is_authenticated() {
                li {
                    Link { to: Route::Dashboard {}, class: "btn btn-primary w-40", "Go to dashboard" }
                }
            } else {
                li {
                    Link { to: Route::Register {}, class: "btn btn-primary w-40", "Register a hotel" }
                }
                li {
                    Link { to: Route::Login {}, class: "btn btn-outline w-40", "Log in" }
                }
            }
            li {
                Link { to: Route::TrackSearch {}, class: "btn btn-secondary w-40", "Track a ticket" }
            }
        }
    )
}

#[component]
fn PlanCard(plan: PlanDto) -> Element {
    rsx!(
        div { class: "card bg-base-200 w-64",
            div { class: "card-body",
                h3 { class: "card-title", "{plan.name}" }
                p { class: "text-2xl", {format!("€{:.2} / month", plan.monthly_price)} }
                if let Some(description) = plan.description {
                    p { class: "text-sm", "{description}" }
                }
                ul { class: "text-sm list-disc pl-4",
                    if let Some(hours) = plan.sla_hours {
                        li { "Resolution within {hours} hours" }
                    }
                    if let Some(technicians) = plan.max_technicians {
                        li { "Up to {technicians} technicians" }
                    }
                    if let Some(tickets) = plan.max_tickets_per_month {
                        li { "{tickets} tickets per month" }
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    let api = use_context::<AppApi>();
    let plans = use_resource(move || {
        let api = api.clone();
        async move { api.get_plans().await }
    });

    rsx!(
        Title { "Hotelfix" }
        Meta {
            name: "description",
            content: "Maintenance ticketing for hotels: guests report issues, technicians fix them."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 max-w-256",
                div { class: "flex items-center gap-2",
                    Icon { width: 32, height: 32, icon: FaScrewdriverWrench }
                    p { class: "text-3xl", "Hotelfix" }
                }
                p { class: "text-center px-4",
                    "Guests report broken things from their room, your technicians pick them up, and you see every deadline at a glance."
                }
                GetStartedButtons {}
                div { class: "flex flex-wrap justify-center gap-4",
                    match &*plans.read_unchecked() {
                        Some(Ok(plans)) => rsx! {
                            for plan in plans.iter().cloned() {
                                PlanCard { key: "{plan.id}", plan }
                            }
                        },
                        Some(Err(e)) => rsx! { p { class: "text-error", "{e}" } },
                        None => rsx! { div { class: "skeleton h-40 w-64" } },
                    }
                }
            }
        }
    )
}
