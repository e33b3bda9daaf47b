use chrono::Utc;
use dioxus::prelude::*;
use hotelfix::{
    model::ticket::{TicketDto, TicketPriority, TicketStatus},
    util::sla::{format_remaining, sla_status, SlaStatus},
};

#[component]
pub fn StatusBadge(status: TicketStatus) -> Element {
    let class = match status {
        TicketStatus::Open => "badge-info",
        TicketStatus::InProgress => "badge-primary",
        TicketStatus::Pending => "badge-warning",
        TicketStatus::Resolved => "badge-success",
        TicketStatus::Closed => "badge-ghost",
    };

    rsx!(span { class: "badge {class}", "{status}" })
}

#[component]
pub fn PriorityBadge(priority: TicketPriority) -> Element {
    let class = match priority {
        TicketPriority::Low => "badge-ghost",
        TicketPriority::Medium => "badge-info",
        TicketPriority::High => "badge-warning",
        TicketPriority::Urgent => "badge-error",
    };

    rsx!(span { class: "badge badge-outline {class}", "{priority}" })
}

/// SLA state of a ticket, with the time left while it is still being worked on
#[component]
pub fn SlaBadge(ticket: TicketDto) -> Element {
    let now = Utc::now().naive_utc();
    let status = sla_status(&ticket, now);

    let class = match status {
        SlaStatus::OnTrack | SlaStatus::Met => "badge-success",
        SlaStatus::AtRisk => "badge-warning",
        SlaStatus::Breached | SlaStatus::Missed => "badge-error",
        SlaStatus::NoDeadline => "badge-ghost",
    };

    let remaining = match (status, ticket.sla_deadline) {
        (SlaStatus::OnTrack | SlaStatus::AtRisk | SlaStatus::Breached, Some(deadline)) => {
            format!(" · {}", format_remaining(deadline, now))
        }
        _ => String::new(),
    };

    rsx!(span { class: "badge {class}", "{status}{remaining}" })
}
