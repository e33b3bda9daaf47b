use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    model::hotel::{HotelDto, HotelRequest, PlanDto},
    service::AppApi,
};

use crate::client::{
    components::ExportButtons,
    router::Route,
    store::toast::Toasts,
    util::use_error_handler,
};

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn Hotels() -> Element {
    let api = use_context::<AppApi>();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut hotels = use_signal(Vec::<HotelDto>::new);
    let mut plans = use_signal(Vec::<PlanDto>::new);

    let mut editing = use_signal(|| None::<i64>);
    let mut name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut contact_email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut plan_id = use_signal(|| None::<i64>);
    let mut active = use_signal(|| true);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.get_hotels().await {
                Ok(list) => hotels.set(list),
                Err(e) => return on_error(e),
            }
            match api.get_plans().await {
                Ok(list) => plans.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let edit = use_callback(move |hotel: HotelDto| {
        editing.set(Some(hotel.id));
        name.set(hotel.name);
        address.set(hotel.address.unwrap_or_default());
        contact_email.set(hotel.contact_email.unwrap_or_default());
        phone.set(hotel.phone.unwrap_or_default());
        plan_id.set(hotel.plan_id);
        active.set(hotel.active);
    });

    let mut reset = move || {
        editing.set(None);
        for mut field in [name, address, contact_email, phone] {
            field.set(String::new());
        }
        plan_id.set(None);
        active.set(true);
    };

    let remove_api = api.clone();
    let remove = use_callback(move |hotel: HotelDto| {
        let api = remove_api.clone();
        spawn(async move {
            match api.delete_hotel(hotel.id).await {
                Ok(()) => {
                    hotels.write().retain(|h| h.id != hotel.id);
                    toasts.info(format!("{} deleted", hotel.name));
                }
                Err(e) => on_error(e),
            }
        });
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let request = HotelRequest {
            name: name().trim().to_string(),
            address: non_empty(address()),
            contact_email: non_empty(contact_email()),
            phone: non_empty(phone()),
            plan_id: plan_id(),
            active: active(),
        };
        let target = editing();

        spawn(async move {
            let result = match target {
                Some(hotel_id) => api.update_hotel(hotel_id, &request).await,
                None => api.create_hotel(&request).await,
            };

            match result {
                Ok(saved) => {
                    toasts.success(format!("{} saved", saved.name));
                    let mut list = hotels.write();
                    match list.iter_mut().find(|h| h.id == saved.id) {
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

    rsx!(
        Title { "Hotels | Hotelfix" }
        div { class: "flex flex-col gap-6",
            div { class: "flex justify-between items-center",
                h1 { class: "text-2xl", "Hotels" }
                ExportButtons::<HotelDto> { rows: hotels(), file_prefix: "hotels" }
            }
            table { class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Contact" }
                        th { "Plan" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for hotel in hotels() {
                        tr { key: "{hotel.id}",
                            td {
                                p { "{hotel.name}" }
                                p { class: "text-xs opacity-70", {hotel.address.clone().unwrap_or_default()} }
                            }
                            td {
                                p { {hotel.contact_email.clone().unwrap_or_default()} }
                                p { class: "text-xs", {hotel.phone.clone().unwrap_or_default()} }
                            }
                            td { {hotel.plan_name.clone().unwrap_or_else(|| "-".to_string())} }
                            td {
                                if hotel.active {
                                    span { class: "badge badge-success", "Active" }
                                } else {
                                    span { class: "badge badge-ghost", "Inactive" }
                                }
                            }
                            td { class: "flex gap-1",
                                Link { class: "btn btn-ghost btn-xs", to: Route::ReportIssue { hotel_id: hotel.id }, "Guest form" }
                                button {
                                    class: "btn btn-ghost btn-xs",
                                    onclick: {
                                        let hotel = hotel.clone();
                                        move |_| edit.call(hotel.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-ghost btn-xs text-error",
                                    onclick: move |_| remove.call(hotel.clone()),
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
                        if editing().is_some() { "Edit hotel" } else { "New hotel" }
                    }
                    input { class: "input w-full", placeholder: "Name", required: true,
                        value: "{name}", oninput: move |evt| name.set(evt.value()) }
                    input { class: "input w-full", placeholder: "Address",
                        value: "{address}", oninput: move |evt| address.set(evt.value()) }
                    input { class: "input w-full", r#type: "email", placeholder: "Contact email",
                        value: "{contact_email}", oninput: move |evt| contact_email.set(evt.value()) }
                    input { class: "input w-full", placeholder: "Phone",
                        value: "{phone}", oninput: move |evt| phone.set(evt.value()) }
                    select {
                        class: "select w-full",
                        onchange: move |evt| plan_id.set(evt.value().parse().ok()),
                        option { value: "", selected: plan_id().is_none(), "No plan" }
                        for plan in plans() {
                            option {
                                key: "{plan.id}",
                                value: "{plan.id}",
                                selected: plan_id() == Some(plan.id),
                                "{plan.name}"
                            }
                        }
                    }
                    label { class: "label",
                        input {
                            class: "toggle",
                            r#type: "checkbox",
                            checked: active(),
                            onchange: move |evt| active.set(evt.checked()),
                        }
                        "Active"
                    }
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
