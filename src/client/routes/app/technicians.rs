use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    model::user::{TechnicianDto, TechnicianRequest},
    service::AppApi,
};

use crate::client::{hooks::use_auth, store::toast::Toasts, util::use_error_handler};

#[component]
pub fn Technicians() -> Element {
    let api = use_context::<AppApi>();
    let auth = use_auth();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut technicians = use_signal(Vec::<TechnicianDto>::new);

    let hotel_id = auth.user().and_then(|user| user.hotel_id);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            let Some(hotel_id) = hotel_id else {
                return;
            };
            match api.get_hotel_technicians(hotel_id).await {
                Ok(list) => technicians.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let remove_api = api.clone();
    let remove = use_callback(move |technician: TechnicianDto| {
        let api = remove_api.clone();
        spawn(async move {
            match api.delete_user(technician.id).await {
                Ok(()) => {
                    technicians.write().retain(|t| t.id != technician.id);
                    toasts.info(format!("{} removed", technician.full_name));
                }
                Err(e) => on_error(e),
            }
        });
    });

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut specialties = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let Some(hotel_id) = hotel_id else {
            return;
        };

        let phone_value = phone().trim().to_string();
        let request = TechnicianRequest {
            email: email().trim().to_string(),
            password: password(),
            full_name: full_name().trim().to_string(),
            hotel_id,
            phone: (!phone_value.is_empty()).then_some(phone_value),
            specialties: specialties()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        };

        spawn(async move {
            match api.create_technician(&request).await {
                Ok(technician) => {
                    toasts.success(format!("{} added", technician.full_name));
                    technicians.write().push(technician);
                    for mut field in [full_name, email, password, phone, specialties] {
                        field.set(String::new());
                    }
                }
                Err(e) => on_error(e),
            }
        });
    };

    rsx!(
        Title { "Technicians | Hotelfix" }
        div { class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Technicians" }
            table { class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Specialties" }
                        th { "Active tickets" }
                        th {}
                    }
                }
                tbody {
                    for technician in technicians() {
                        tr { key: "{technician.id}",
                            td { "{technician.full_name}" }
                            td { "{technician.email}" }
                            td { {technician.phone.clone().unwrap_or_default()} }
                            td { {technician.specialties.join(", ")} }
                            td { "{technician.active_tickets}" }
                            td {
                                button {
                                    class: "btn btn-ghost btn-xs text-error",
                                    onclick: move |_| remove.call(technician.clone()),
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
            form { class: "card bg-base-200 max-w-xl", onsubmit,
                div { class: "card-body gap-2",
                    h2 { class: "card-title text-lg", "Add a technician" }
                    input { class: "input w-full", placeholder: "Full name", required: true,
                        value: "{full_name}", oninput: move |evt| full_name.set(evt.value()) }
                    input { class: "input w-full", r#type: "email", placeholder: "Email", required: true,
                        value: "{email}", oninput: move |evt| email.set(evt.value()) }
                    input { class: "input w-full", r#type: "password", placeholder: "Initial password", required: true,
                        value: "{password}", oninput: move |evt| password.set(evt.value()) }
                    input { class: "input w-full", placeholder: "Phone",
                        value: "{phone}", oninput: move |evt| phone.set(evt.value()) }
                    input { class: "input w-full", placeholder: "Specialties, comma separated",
                        value: "{specialties}", oninput: move |evt| specialties.set(evt.value()) }
                    button { class: "btn btn-primary", r#type: "submit", "Add technician" }
                }
            }
        }
    )
}
