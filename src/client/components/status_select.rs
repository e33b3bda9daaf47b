use dioxus::prelude::*;
use hotelfix::model::ticket::TicketStatus;

/// Offers only the statuses the lifecycle allows after `current`
#[component]
pub fn StatusSelect(current: TicketStatus, disabled: bool, onselect: EventHandler<TicketStatus>) -> Element {
    let next = current.next_statuses();

    if next.is_empty() {
        return rsx!(p { class: "text-sm opacity-70", "This ticket is closed." });
    }

    rsx!(
        div { class: "flex flex-wrap gap-2",
            for status in next.iter().copied() {
                button {
                    key: "{status.as_str()}",
                    class: "btn btn-sm btn-outline",
                    disabled,
                    onclick: move |_| onselect.call(status),
                    if status == TicketStatus::Open { "Reopen" } else { "Mark {status}" }
                }
            }
        }
    )
}
