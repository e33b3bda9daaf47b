use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    model::ticket::{CreatePublicTicketRequest, ImageUpload, TicketDto, TicketPriority},
    service::AppApi,
};

use crate::client::{components::Page, router::Route, util::read_images};

/// Guest form for reporting a problem in a hotel, reachable through a per-hotel link or QR code
#[component]
pub fn ReportIssue(hotel_id: i64) -> Element {
    let api = use_context::<AppApi>();

    let categories_api = api.clone();
    let categories = use_resource(move || {
        let api = categories_api.clone();
        async move { api.get_categories().await.unwrap_or_default() }
    });

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut priority = use_signal(|| TicketPriority::Medium);
    let mut category_id = use_signal(|| None::<i64>);
    let mut room_number = use_signal(String::new);
    let mut reporter_name = use_signal(String::new);
    let mut reporter_email = use_signal(String::new);
    let mut images = use_signal(Vec::<ImageUpload>::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut created = use_signal(|| None::<TicketDto>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            let room = room_number().trim().to_string();
            let request = CreatePublicTicketRequest {
                hotel_id,
                title: title().trim().to_string(),
                description: description().trim().to_string(),
                priority: priority(),
                category_id: category_id(),
                room_number: (!room.is_empty()).then_some(room),
                reporter_name: reporter_name().trim().to_string(),
                reporter_email: reporter_email().trim().to_string(),
            };

            let images = images();
            match api.create_public_ticket(&request, &images).await {
                Ok(ticket) => created.set(Some(ticket)),
                Err(e) => error.set(Some(e.to_string())),
            }

            submitting.set(false);
        });
    };

    if let Some(ticket) = created() {
        return rsx!(
            Title { "Issue reported | Hotelfix" }
            Page { class: "flex items-center justify-center",
                div { class: "card bg-base-200 w-96",
                    div { class: "card-body items-center text-center gap-3",
                        h2 { class: "card-title", "Thank you, we're on it" }
                        p { "Your ticket number is" }
                        p { class: "text-2xl font-mono", "{ticket.ticket_number}" }
                        p { class: "text-sm opacity-70", "Keep it to follow the progress of your request." }
                        Link {
                            class: "btn btn-primary",
                            to: Route::TrackTicket { ticket_number: ticket.ticket_number.clone() },
                            "Track this ticket"
                        }
                    }
                }
            }
        );
    }

    rsx!(
        Title { "Report an issue | Hotelfix" }
        Page { class: "flex items-center justify-center",
            form { class: "card bg-base-200 w-full max-w-xl", onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Report an issue" }
                    if let Some(message) = error() {
                        div { class: "alert alert-error", "{message}" }
                    }
                    input {
                        class: "input w-full",
                        placeholder: "What is wrong?",
                        required: true,
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    textarea {
                        class: "textarea w-full",
                        placeholder: "Describe the problem",
                        required: true,
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    div { class: "flex gap-2",
                        select {
                            class: "select flex-1",
                            value: "{priority().as_str()}",
                            onchange: move |evt| {
                                if let Some(value) = TicketPriority::parse(&evt.value()) {
                                    priority.set(value);
                                }
                            },
                            for value in TicketPriority::ALL {
                                option { value: "{value.as_str()}", "{value}" }
                            }
                        }
                        select {
                            class: "select flex-1",
                            onchange: move |evt| category_id.set(evt.value().parse().ok()),
                            option { value: "", "Category" }
                            for category in categories.read().clone().unwrap_or_default() {
                                option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                            }
                        }
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Room number",
                        value: "{room_number}",
                        oninput: move |evt| room_number.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Your name",
                        required: true,
                        value: "{reporter_name}",
                        oninput: move |evt| reporter_name.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Your email",
                        required: true,
                        value: "{reporter_email}",
                        oninput: move |evt| reporter_email.set(evt.value()),
                    }
                    input {
                        class: "file-input w-full",
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        onchange: move |evt| async move {
                            images.set(read_images(evt).await);
                        },
                    }
                    if !images.read().is_empty() {
                        p { class: "text-sm", {format!("{} photo(s) attached", images.read().len())} }
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: submitting(),
                        if submitting() { "Sending…" } else { "Send report" }
                    }
                }
            }
        }
    )
}
