//! Alerts for urgent tickets nobody has picked up yet.
//!
//! [`NotificationCenter`] holds the notifications shown in the navbar bell and remembers
//! every ticket it has already alerted about, so repeated polls of the same ticket list never
//! produce the same alert twice. [`poll_urgent_tickets`] is the single poll step the
//! `use_notifications` hook runs on an interval.

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::NaiveDateTime;
use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::ticket::{TicketDto, TicketPriority, TicketStatus},
    service::{storage::SessionStorage, transport::HttpTransport, ApiService},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// `ticket-{ticket_id}`, unique per ticket
    pub id: String,
    pub ticket_id: i64,
    pub ticket_number: String,
    pub title: String,
    pub message: String,
    pub created_at: NaiveDateTime,
    pub read: bool,
}

impl Notification {
    fn for_ticket(ticket: &TicketDto) -> Self {
        let location = ticket
            .room_number
            .as_deref()
            .map(|room| format!(" in room {}", room))
            .unwrap_or_default();

        Self {
            id: notification_id(ticket.id),
            ticket_id: ticket.id,
            ticket_number: ticket.ticket_number.clone(),
            title: format!("Urgent ticket {}", ticket.ticket_number),
            message: format!("{}{} is waiting for a technician", ticket.title, location),
            created_at: ticket.created_at,
            read: false,
        }
    }
}

pub fn notification_id(ticket_id: i64) -> String {
    format!("ticket-{}", ticket_id)
}

/// Whether a ticket warrants an alert: urgent, unassigned and still open
pub fn is_alert_candidate(ticket: &TicketDto) -> bool {
    ticket.priority == TicketPriority::Urgent
        && !ticket.is_assigned()
        && ticket.status == TicketStatus::Open
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    seen_ticket_ids: HashSet<i64>,
    polling: bool,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Record alerts for candidate tickets not seen before.
    ///
    /// # Returns
    /// Only the notifications created by this call, for toasting
    pub fn ingest(&mut self, tickets: &[TicketDto]) -> Vec<Notification> {
        let mut fresh: Vec<Notification> = tickets
            .iter()
            .filter(|ticket| is_alert_candidate(ticket))
            .filter(|ticket| self.seen_ticket_ids.insert(ticket.id))
            .map(Notification::for_ticket)
            .collect();

        fresh.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        self.notifications.splice(0..0, fresh.iter().cloned());

        fresh
    }

    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    /// Drop every notification and forget which tickets were seen
    pub fn clear(&mut self) {
        self.notifications.clear();
        self.seen_ticket_ids.clear();
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Claim the poll slot.
    ///
    /// # Returns
    /// - `true` - No poll was running; the caller must call [`Self::end_poll`] when done
    /// - `false` - A poll is already in flight; the caller should skip this round
    pub fn begin_poll(&mut self) -> bool {
        if self.polling {
            return false;
        }

        self.polling = true;
        true
    }

    pub fn end_poll(&mut self) {
        self.polling = false;
    }
}

/// What the polling loop does after one poll
#[derive(Debug)]
pub enum PollOutcome {
    /// New notifications to surface
    Alerts(Vec<Notification>),
    /// Nothing new, or the round was skipped
    Quiet,
    /// The token was rejected; the loop stops and the user must sign in again
    SessionExpired(Error),
    /// The poll failed for another reason; the loop retries next interval
    Failed(Error),
}

impl From<Result<Vec<Notification>, Error>> for PollOutcome {
    fn from(result: Result<Vec<Notification>, Error>) -> Self {
        match result {
            Ok(fresh) if fresh.is_empty() => Self::Quiet,
            Ok(fresh) => Self::Alerts(fresh),
            Err(e) if e.is_unauthorized() => Self::SessionExpired(e),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Run one poll of a hotel's tickets and ingest new urgent alerts.
///
/// The center is borrowed only around the fetch, never across it, so the UI can keep reading
/// it while the request is in flight.
///
/// # Returns
/// - `Ok(Vec<Notification>)` - Notifications created by this poll; empty when another poll
///   was already running
/// - `Err(Error)` - The fetch failed; the poll slot is released either way
pub async fn poll_urgent_tickets<T, S>(
    api: &ApiService<T, S>,
    hotel_id: i64,
    center: &RefCell<NotificationCenter>,
) -> Result<Vec<Notification>, Error>
where
    T: HttpTransport,
    S: SessionStorage,
{
    if !center.borrow_mut().begin_poll() {
        tracing::debug!(hotel_id = hotel_id, "Skipping notification poll, one is in flight");
        return Ok(Vec::new());
    }

    let result = api.get_hotel_tickets(hotel_id).await;

    let mut center = center.borrow_mut();
    center.end_poll();

    let fresh = center.ingest(&result?);

    if !fresh.is_empty() {
        tracing::debug!(
            hotel_id = hotel_id,
            count = fresh.len(),
            "New urgent ticket notifications"
        );
    }

    Ok(fresh)
}
