//! Tests for TicketReport and RevenueReport.

use crate::{
    model::{
        billing::{PaymentDto, PaymentStatus},
        ticket::{TicketPriority, TicketStatus},
    },
    util::{
        report::{RevenueReport, TicketReport},
        tests::{at, on_day, ticket, urgent_ticket},
    },
};

/// Tests status and priority counters, including zero entries.
#[test]
fn counts_by_status_and_priority() {
    let mut resolved = ticket(2);
    resolved.status = TicketStatus::Resolved;
    let tickets = vec![ticket(1), resolved, urgent_ticket(3)];

    let report = TicketReport::from_tickets(&tickets, at(12, 0));

    assert_eq!(report.total, 3);
    assert_eq!(report.count_for(TicketStatus::Open), 2);
    assert_eq!(report.count_for(TicketStatus::Resolved), 1);
    assert_eq!(report.count_for(TicketStatus::Closed), 0);
    assert_eq!(report.by_priority[TicketPriority::Urgent.label()], 1);
    assert_eq!(report.active, 2);
    assert_eq!(report.finished, 1);
    assert_eq!(report.unassigned_active, 2);
}

/// Tests average resolution hours and SLA compliance.
///
/// Expected: resolutions of 2h and 4h average to 3h; one of two on time gives 0.5
#[test]
fn computes_resolution_and_compliance() {
    let mut fast = ticket(1);
    fast.status = TicketStatus::Resolved;
    fast.sla_deadline = Some(at(11, 0));
    fast.resolved_at = Some(at(10, 0));

    let mut slow = ticket(2);
    slow.status = TicketStatus::Closed;
    slow.sla_deadline = Some(at(11, 0));
    slow.resolved_at = Some(at(12, 0));

    let report = TicketReport::from_tickets(&[fast, slow], at(18, 0));

    assert_eq!(report.average_resolution_hours, Some(3.0));
    assert_eq!(report.sla_compliance_rate, Some(0.5));
}

/// Tests that no resolved tickets leaves averages unset.
#[test]
fn empty_report_has_no_rates() {
    let report = TicketReport::from_tickets(&[], at(9, 0));

    assert_eq!(report.total, 0);
    assert!(report.average_resolution_hours.is_none());
    assert!(report.sla_compliance_rate.is_none());
}

/// Tests tickets without a category grouped together.
#[test]
fn groups_uncategorized_tickets() {
    let mut bare = ticket(1);
    bare.category_name = None;

    let report = TicketReport::from_tickets(&[bare, ticket(2)], at(9, 0));

    assert_eq!(report.by_category["Uncategorized"], 1);
    assert_eq!(report.by_category["Plumbing"], 1);
}

/// Tests the zero-filled daily series.
#[test]
fn daily_series_fills_missing_days() {
    let mut later = ticket(2);
    later.created_at = on_day(3, 10, 0);

    let report = TicketReport::from_tickets(&[ticket(1), later], on_day(3, 12, 0));
    let series = report.daily_series(on_day(3, 0, 0).date(), 3);

    let counts: Vec<usize> = series.iter().map(|(_, count)| *count).collect();
    assert_eq!(counts, vec![1, 0, 1]);
}

fn payment(id: i64, amount: f64, status: PaymentStatus, day: u32) -> PaymentDto {
    PaymentDto {
        id,
        hotel_id: 1,
        hotel_name: Some("Seaview".to_string()),
        plan_name: Some("Pro".to_string()),
        amount,
        currency: "EUR".to_string(),
        status,
        created_at: on_day(day, 9, 0),
        paid_at: None,
    }
}

/// Tests revenue totals per status and month.
#[test]
fn revenue_report_totals() {
    let payments = vec![
        payment(1, 49.0, PaymentStatus::Paid, 1),
        payment(2, 49.0, PaymentStatus::Paid, 15),
        payment(3, 99.0, PaymentStatus::Pending, 20),
        payment(4, 10.0, PaymentStatus::Refunded, 21),
    ];

    let report = RevenueReport::from_payments(&payments);

    assert_eq!(report.total_paid, 98.0);
    assert_eq!(report.outstanding, 99.0);
    assert_eq!(report.paid_per_month[&(2024, 3)], 98.0);
    assert_eq!(report.count_by_status["Refunded"], 1);
}
