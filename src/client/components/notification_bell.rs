use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBell;
use dioxus_free_icons::Icon;
use hotelfix::util::time::format_relative_time;

use crate::client::{hooks::use_notifications, router::Route};

/// Bell in the header listing urgent tickets nobody has picked up
#[component]
pub fn NotificationBell(hotel_id: Option<i64>) -> Element {
    let notifications = use_notifications(hotel_id);
    let unread = notifications.unread_count();
    let items = notifications.items();
    let now = Utc::now().naive_utc();

    let all_read = notifications.clone();
    let cleared = notifications.clone();

    rsx!(
        div { class: "dropdown dropdown-end",
            div { tabindex: "0", role: "button", class: "btn btn-ghost btn-circle",
                div { class: "indicator",
                    Icon { width: 20, height: 20, icon: FaBell }
                    if unread > 0 {
                        span { class: "badge badge-error badge-sm indicator-item", "{unread}" }
                    }
                }
            }
            div { tabindex: "0", class: "dropdown-content z-20 w-80 bg-base-100 shadow rounded-box p-2",
                div { class: "flex justify-between items-center p-2",
                    p { class: "font-semibold", "Notifications" }
                    div { class: "flex gap-1",
                        button {
                            class: "btn btn-ghost btn-xs",
                            disabled: unread == 0,
                            onclick: move |_| all_read.mark_all_as_read(),
                            "Mark all read"
                        }
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| cleared.clear(),
                            "Clear"
                        }
                    }
                }
                if items.is_empty() {
                    p { class: "p-2 text-sm opacity-70", "Nothing urgent right now." }
                }
                ul { class: "menu",
                    for notification in items {
                        li { key: "{notification.id}",
                            Link {
                                class: if notification.read { "opacity-60" } else { "font-semibold" },
                                to: Route::TicketDetail { id: notification.ticket_id },
                                onclick: {
                                    let notifications = notifications.clone();
                                    let id = notification.id.clone();
                                    move |_| notifications.mark_as_read(&id)
                                },
                                div {
                                    p { "{notification.title}" }
                                    p { class: "text-xs", "{notification.message}" }
                                    p { class: "text-xs opacity-60",
                                        {format_relative_time(&notification.created_at, &now)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
