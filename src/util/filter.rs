//! Client-side narrowing of ticket lists on the dashboards.

use crate::model::ticket::{TicketDto, TicketPriority, TicketStatus};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    /// Case-insensitive match against number, title, room and reporter
    pub search: String,
    pub unassigned_only: bool,
}

impl TicketFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.search.trim().is_empty()
            && !self.unassigned_only
    }

    pub fn matches(&self, ticket: &TicketDto) -> bool {
        if self.status.is_some_and(|status| ticket.status != status) {
            return false;
        }

        if self.priority.is_some_and(|priority| ticket.priority != priority) {
            return false;
        }

        if self.unassigned_only && ticket.is_assigned() {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            Some(ticket.ticket_number.as_str()),
            Some(ticket.title.as_str()),
            ticket.room_number.as_deref(),
            ticket.reporter_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching tickets, newest first
    pub fn apply(&self, tickets: &[TicketDto]) -> Vec<TicketDto> {
        let mut matching: Vec<TicketDto> = tickets
            .iter()
            .filter(|ticket| self.matches(ticket))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }
}
