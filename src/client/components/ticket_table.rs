use dioxus::prelude::*;
use hotelfix::{model::ticket::TicketDto, util::time::format_datetime};

use crate::client::{
    components::{PaginationBar, PriorityBadge, SlaBadge, StatusBadge},
    hooks::use_pagination,
    router::Route,
};

/// Paginated ticket list linking each row to its detail page
#[component]
pub fn TicketTable(tickets: Memo<Vec<TicketDto>>, page_size: usize) -> Element {
    let total = use_memo(move || tickets.read().len());
    let paginator = use_pagination(total, page_size);

    let tickets = tickets.read();
    let page = paginator.read().page_slice(tickets.as_slice()).to_vec();

    if tickets.is_empty() {
        return rsx!(p { class: "opacity-70 py-4", "No tickets yet." });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-zebra",
                thead {
                    tr {
                        th { "Ticket" }
                        th { "Title" }
                        th { "Room" }
                        th { "Status" }
                        th { "Priority" }
                        th { "SLA" }
                        th { "Assigned to" }
                        th { "Created" }
                    }
                }
                tbody {
                    for ticket in page {
                        tr { key: "{ticket.id}",
                            td {
                                Link {
                                    class: "link link-primary",
                                    to: Route::TicketDetail { id: ticket.id },
                                    "{ticket.ticket_number}"
                                }
                            }
                            td { "{ticket.title}" }
                            td { {ticket.room_number.clone().unwrap_or_default()} }
                            td { StatusBadge { status: ticket.status } }
                            td { PriorityBadge { priority: ticket.priority } }
                            td { SlaBadge { ticket: ticket.clone() } }
                            td {
                                {ticket.assigned_to_name.clone().unwrap_or_else(|| "Unassigned".to_string())}
                            }
                            td { {format_datetime(&ticket.created_at)} }
                        }
                    }
                }
            }
        }
        PaginationBar { paginator }
    )
}
