use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{service::AppApi, util::time::format_datetime};

use crate::client::{
    components::{Page, PriorityBadge, SlaBadge, StatusBadge},
    router::Route,
};

#[component]
pub fn TrackSearch() -> Element {
    let nav = use_navigator();
    let mut ticket_number = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let ticket_number = ticket_number().trim().to_string();
        if !ticket_number.is_empty() {
            nav.push(Route::TrackTicket { ticket_number });
        }
    };

    rsx!(
        Title { "Track a ticket | Hotelfix" }
        Page { class: "flex items-center justify-center",
            form { class: "card bg-base-200 w-96", onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Track a ticket" }
                    input {
                        class: "input w-full font-mono",
                        placeholder: "Ticket number",
                        required: true,
                        value: "{ticket_number}",
                        oninput: move |evt| ticket_number.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Look up" }
                }
            }
        }
    )
}

/// Public, read-only view of a ticket for the guest who reported it
#[component]
pub fn TrackTicket(ticket_number: String) -> Element {
    let api = use_context::<AppApi>();
    let number = ticket_number.clone();

    let ticket = use_resource(use_reactive!(|(ticket_number,)| {
        let api = api.clone();
        async move { api.get_public_ticket(&ticket_number).await }
    }));

    rsx!(
        Title { "Ticket {number} | Hotelfix" }
        Page { class: "flex items-center justify-center",
            match &*ticket.read_unchecked() {
                Some(Ok(ticket)) => rsx! {
                    div { class: "card bg-base-200 w-full max-w-xl",
                        div { class: "card-body gap-2",
                            p { class: "font-mono opacity-70", "{ticket.ticket_number}" }
                            h2 { class: "card-title", "{ticket.title}" }
                            div { class: "flex gap-2",
                                StatusBadge { status: ticket.status }
                                PriorityBadge { priority: ticket.priority }
                                SlaBadge { ticket: ticket.clone() }
                            }
                            p { "{ticket.description}" }
                            if let Some(hotel) = &ticket.hotel_name {
                                p { class: "text-sm", "Hotel: {hotel}" }
                            }
                            if let Some(room) = &ticket.room_number {
                                p { class: "text-sm", "Room: {room}" }
                            }
                            p { class: "text-sm", "Reported: " {format_datetime(&ticket.created_at)} }
                            if let Some(resolved_at) = &ticket.resolved_at {
                                p { class: "text-sm", "Resolved: " {format_datetime(resolved_at)} }
                            }
                            div { class: "flex flex-wrap gap-2",
                                for image in ticket.images.iter() {
                                    img { key: "{image.id}", class: "w-32 rounded", src: "{image.url}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "flex flex-col items-center gap-2",
                        div { class: "alert alert-error", "{e}" }
                        Link { class: "btn btn-outline", to: Route::TrackSearch {}, "Try another number" }
                    }
                },
                None => rsx! { div { class: "skeleton h-64 w-full max-w-xl" } },
            }
        }
    )
}
