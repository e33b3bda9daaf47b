//! Tests for NotificationCenter.

use crate::{
    error::{ApiError, Error},
    model::ticket::{TicketPriority, TicketStatus},
    util::{
        notification::{is_alert_candidate, notification_id, NotificationCenter, PollOutcome},
        tests::{on_day, ticket, urgent_ticket},
    },
};

/// Tests the alert filter: urgent, unassigned and open only.
#[test]
fn only_urgent_unassigned_open_tickets_alert() {
    let mut assigned = urgent_ticket(2);
    assigned.assigned_to_id = Some(9);
    let mut in_progress = urgent_ticket(3);
    in_progress.status = TicketStatus::InProgress;
    let mut high = ticket(4);
    high.priority = TicketPriority::High;

    assert!(is_alert_candidate(&urgent_ticket(1)));
    assert!(!is_alert_candidate(&assigned));
    assert!(!is_alert_candidate(&in_progress));
    assert!(!is_alert_candidate(&high));
}

/// Tests that polling the same tickets twice never duplicates notifications.
///
/// Expected: 2 notifications after the first ingest, none new after the second
#[test]
fn repeated_ingest_does_not_duplicate() {
    let mut center = NotificationCenter::new();
    let tickets = vec![urgent_ticket(1), ticket(2), urgent_ticket(3)];

    let first = center.ingest(&tickets);
    let second = center.ingest(&tickets);

    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
    assert_eq!(center.notifications().len(), 2);

    let mut ids: Vec<&str> = center.notifications().iter().map(|n| n.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 2);
}

/// Tests that a ticket seen once does not alert again after it was read.
#[test]
fn read_notification_is_not_recreated() {
    let mut center = NotificationCenter::new();
    center.ingest(&[urgent_ticket(1)]);
    center.mark_all_as_read();

    let fresh = center.ingest(&[urgent_ticket(1), urgent_ticket(5)]);

    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].id, notification_id(5));
    assert_eq!(center.unread_count(), 1);
}

/// Tests that new notifications are listed newest first.
#[test]
fn newest_notifications_come_first() {
    let mut center = NotificationCenter::new();
    let mut older = urgent_ticket(1);
    older.created_at = on_day(1, 9, 0);
    let mut newer = urgent_ticket(2);
    newer.created_at = on_day(2, 9, 0);

    center.ingest(&[older]);
    center.ingest(&[newer]);

    let ids: Vec<i64> = center.notifications().iter().map(|n| n.ticket_id).collect();
    assert_eq!(ids, vec![2, 1]);
}

/// Tests that mark_as_read is idempotent and ignores unknown ids.
#[test]
fn mark_as_read_is_idempotent() {
    let mut center = NotificationCenter::new();
    center.ingest(&[urgent_ticket(1), urgent_ticket(2)]);
    let id = notification_id(1);

    center.mark_as_read(&id);
    let after_first = center.notifications().to_vec();
    center.mark_as_read(&id);
    center.mark_as_read("ticket-404");

    assert_eq!(center.notifications(), after_first.as_slice());
    assert_eq!(center.unread_count(), 1);
}

/// Tests that mark_all_as_read is idempotent.
#[test]
fn mark_all_as_read_is_idempotent() {
    let mut center = NotificationCenter::new();
    center.ingest(&[urgent_ticket(1), urgent_ticket(2)]);

    center.mark_all_as_read();
    let after_first = center.notifications().to_vec();
    center.mark_all_as_read();

    assert_eq!(center.unread_count(), 0);
    assert_eq!(center.notifications(), after_first.as_slice());
}

/// Tests that clear forgets seen tickets so they can alert again.
#[test]
fn clear_forgets_seen_tickets() {
    let mut center = NotificationCenter::new();
    center.ingest(&[urgent_ticket(1)]);

    center.clear();

    assert!(center.notifications().is_empty());
    assert_eq!(center.ingest(&[urgent_ticket(1)]).len(), 1);
}

/// Tests the overlap guard.
///
/// Expected: a second begin_poll fails until end_poll releases the slot
#[test]
fn poll_guard_blocks_overlap() {
    let mut center = NotificationCenter::new();

    assert!(center.begin_poll());
    assert!(!center.begin_poll());
    assert!(center.is_polling());

    center.end_poll();

    assert!(center.begin_poll());
}

/// Tests that a rejected token ends polling instead of being retried.
///
/// Expected: 401 maps to SessionExpired, any other failure to Failed
#[test]
fn rejected_token_expires_session() {
    let expired = PollOutcome::from(Err(Error::from(ApiError::Unauthorized)));
    let failed = PollOutcome::from(Err(Error::from(ApiError::RequestFailed {
        status: 503,
        message: "Service unavailable".to_string(),
    })));

    assert!(matches!(expired, PollOutcome::SessionExpired(e) if e.is_unauthorized()));
    assert!(matches!(failed, PollOutcome::Failed(_)));
}

/// Tests that only polls with fresh notifications produce alerts.
#[test]
fn empty_poll_is_quiet() {
    let mut center = NotificationCenter::new();
    let fresh = center.ingest(&[urgent_ticket(1)]);

    assert!(matches!(PollOutcome::from(Ok(Vec::new())), PollOutcome::Quiet));
    assert!(matches!(
        PollOutcome::from(Ok(fresh)),
        PollOutcome::Alerts(alerts) if alerts.len() == 1
    ));
}
