//! Aggregates behind the dashboard widgets and the reports page.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::{
    model::{
        billing::{PaymentDto, PaymentStatus},
        ticket::{TicketDto, TicketPriority, TicketStatus},
    },
    util::sla::{sla_status, SlaStatus},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketReport {
    pub total: usize,
    pub by_status: BTreeMap<&'static str, usize>,
    pub by_priority: BTreeMap<&'static str, usize>,
    pub by_category: BTreeMap<String, usize>,
    /// Open, in progress or pending
    pub active: usize,
    /// Resolved or closed
    pub finished: usize,
    pub unassigned_active: usize,
    /// Mean hours from creation to resolution over tickets with a resolution timestamp
    pub average_resolution_hours: Option<f64>,
    /// Share of finished tickets with a deadline that were resolved on time, in `[0, 1]`
    pub sla_compliance_rate: Option<f64>,
    /// Active tickets currently past their deadline
    pub sla_breached: usize,
    pub created_per_day: BTreeMap<NaiveDate, usize>,
}

impl TicketReport {
    pub fn from_tickets(tickets: &[TicketDto], now: NaiveDateTime) -> Self {
        let mut report = Self {
            total: tickets.len(),
            ..Self::default()
        };

        for status in TicketStatus::ALL {
            report.by_status.insert(status.label(), 0);
        }
        for priority in TicketPriority::ALL {
            report.by_priority.insert(priority.label(), 0);
        }

        let mut resolution_hours = Vec::new();
        let mut sla_met = 0usize;
        let mut sla_judged = 0usize;

        for ticket in tickets {
            *report.by_status.entry(ticket.status.label()).or_default() += 1;
            *report.by_priority.entry(ticket.priority.label()).or_default() += 1;

            let category = ticket
                .category_name
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string());
            *report.by_category.entry(category).or_default() += 1;

            *report
                .created_per_day
                .entry(ticket.created_at.date())
                .or_default() += 1;

            if ticket.status.is_active() {
                report.active += 1;
                if !ticket.is_assigned() {
                    report.unassigned_active += 1;
                }
            } else {
                report.finished += 1;
            }

            if let Some(resolved_at) = ticket.resolved_at {
                let minutes = resolved_at
                    .signed_duration_since(ticket.created_at)
                    .num_minutes();
                if minutes >= 0 {
                    resolution_hours.push(minutes as f64 / 60.0);
                }
            }

            match sla_status(ticket, now) {
                SlaStatus::Met => {
                    sla_met += 1;
                    sla_judged += 1;
                }
                SlaStatus::Missed => sla_judged += 1,
                SlaStatus::Breached => report.sla_breached += 1,
                _ => (),
            }
        }

        if !resolution_hours.is_empty() {
            report.average_resolution_hours =
                Some(resolution_hours.iter().sum::<f64>() / resolution_hours.len() as f64);
        }

        if sla_judged > 0 {
            report.sla_compliance_rate = Some(sla_met as f64 / sla_judged as f64);
        }

        report
    }

    /// Count for a status, zero when absent
    pub fn count_for(&self, status: TicketStatus) -> usize {
        self.by_status.get(status.label()).copied().unwrap_or(0)
    }

    /// The `days` most recent days of ticket creation counts ending at `today`, zero-filled
    pub fn daily_series(&self, today: NaiveDate, days: u32) -> Vec<(NaiveDate, usize)> {
        (0..days)
            .rev()
            .filter_map(|offset| today.checked_sub_days(chrono::Days::new(offset as u64)))
            .map(|day| (day, self.created_per_day.get(&day).copied().unwrap_or(0)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevenueReport {
    /// Sum of paid amounts
    pub total_paid: f64,
    pub outstanding: f64,
    pub count_by_status: BTreeMap<&'static str, usize>,
    /// Paid amount per `(year, month)`
    pub paid_per_month: BTreeMap<(i32, u32), f64>,
}

impl RevenueReport {
    pub fn from_payments(payments: &[PaymentDto]) -> Self {
        let mut report = Self::default();

        for payment in payments {
            *report
                .count_by_status
                .entry(payment.status.label())
                .or_default() += 1;

            match payment.status {
                PaymentStatus::Paid => {
                    report.total_paid += payment.amount;

                    let paid_at = payment.paid_at.unwrap_or(payment.created_at);
                    *report
                        .paid_per_month
                        .entry((paid_at.year(), paid_at.month()))
                        .or_default() += payment.amount;
                }
                PaymentStatus::Pending | PaymentStatus::Failed => {
                    report.outstanding += payment.amount;
                }
                PaymentStatus::Refunded => (),
            }
        }

        report
    }
}
