use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    model::hotel::{PlanDto, PlanRequest},
    service::AppApi,
};

use crate::client::{store::toast::Toasts, util::use_error_handler};

#[component]
pub fn Plans() -> Element {
    let api = use_context::<AppApi>();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut plans = use_signal(Vec::<PlanDto>::new);

    let mut editing = use_signal(|| None::<i64>);
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut max_technicians = use_signal(String::new);
    let mut max_tickets = use_signal(String::new);
    let mut sla_hours = use_signal(String::new);
    let mut description = use_signal(String::new);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.get_plans().await {
                Ok(list) => plans.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let edit = use_callback(move |plan: PlanDto| {
        let number = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_default();

        editing.set(Some(plan.id));
        name.set(plan.name);
        price.set(format!("{:.2}", plan.monthly_price));
        max_technicians.set(number(plan.max_technicians));
        max_tickets.set(number(plan.max_tickets_per_month));
        sla_hours.set(number(plan.sla_hours));
        description.set(plan.description.unwrap_or_default());
    });

    let mut reset = move || {
        editing.set(None);
        for mut field in [name, price, max_technicians, max_tickets, sla_hours, description] {
            field.set(String::new());
        }
    };

    let remove_api = api.clone();
    let remove = use_callback(move |plan_id: i64| {
        let api = remove_api.clone();
        spawn(async move {
            match api.delete_plan(plan_id).await {
                Ok(()) => plans.write().retain(|p| p.id != plan_id),
                Err(e) => on_error(e),
            }
        });
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        let Ok(monthly_price) = price().trim().replace(',', ".").parse::<f64>() else {
            toasts.error("Monthly price must be a number");
            return;
        };

        let description_value = description().trim().to_string();
        let request = PlanRequest {
            name: name().trim().to_string(),
            monthly_price,
            max_technicians: max_technicians().trim().parse().ok(),
            max_tickets_per_month: max_tickets().trim().parse().ok(),
            sla_hours: sla_hours().trim().parse().ok(),
            description: (!description_value.is_empty()).then_some(description_value),
        };
        let target = editing();

        spawn(async move {
            let result = match target {
                Some(plan_id) => api.update_plan(plan_id, &request).await,
                None => api.create_plan(&request).await,
            };

            match result {
                Ok(saved) => {
                    toasts.success(format!("Plan {} saved", saved.name));
                    let mut list = plans.write();
                    match list.iter_mut().find(|p| p.id == saved.id) {
                        Some(existing) => *existing = saved,
                        None => list.push(saved),
                    }
                    drop(list);
                    reset();
                }
                Err(e) => on_error(e),
            }
        });
    };

    let limit = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_else(|| "Unlimited".to_string());

    rsx!(
        Title { "Plans | Hotelfix" }
        div { class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Subscription plans" }
            table { class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Price / month" }
                        th { "Technicians" }
                        th { "Tickets / month" }
                        th { "SLA" }
                        th {}
                    }
                }
                tbody {
                    for plan in plans() {
                        tr { key: "{plan.id}",
                            td { "{plan.name}" }
                            td { {format!("€{:.2}", plan.monthly_price)} }
                            td { {limit(plan.max_technicians)} }
                            td { {limit(plan.max_tickets_per_month)} }
                            td { {plan.sla_hours.map(|h| format!("{} h", h)).unwrap_or_else(|| "-".to_string())} }
                            td { class: "flex gap-1",
                                button {
                                    class: "btn btn-ghost btn-xs",
                                    onclick: {
                                        let plan = plan.clone();
                                        move |_| edit.call(plan.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-ghost btn-xs text-error",
                                    onclick: move |_| remove.call(plan.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
            form { class: "card bg-base-200 max-w-xl", onsubmit,
                div { class: "card-body gap-2",
                    h2 { class: "card-title text-lg",
                        if editing().is_some() { "Edit plan" } else { "New plan" }
                    }
                    input { class: "input w-full", placeholder: "Name", required: true,
                        value: "{name}", oninput: move |evt| name.set(evt.value()) }
                    input { class: "input w-full", placeholder: "Monthly price", required: true,
                        value: "{price}", oninput: move |evt| price.set(evt.value()) }
                    input { class: "input w-full", r#type: "number", placeholder: "Max technicians",
                        value: "{max_technicians}", oninput: move |evt| max_technicians.set(evt.value()) }
                    input { class: "input w-full", r#type: "number", placeholder: "Max tickets per month",
                        value: "{max_tickets}", oninput: move |evt| max_tickets.set(evt.value()) }
                    input { class: "input w-full", r#type: "number", placeholder: "SLA hours",
                        value: "{sla_hours}", oninput: move |evt| sla_hours.set(evt.value()) }
                    textarea { class: "textarea w-full", placeholder: "Description",
                        value: "{description}", oninput: move |evt| description.set(evt.value()) }
                    div { class: "flex gap-2",
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                        if editing().is_some() {
                            button { class: "btn btn-ghost", r#type: "button", onclick: move |_| reset(), "Cancel" }
                        }
                    }
                }
            }
        }
    )
}
