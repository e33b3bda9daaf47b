//! SLA deadline evaluation.
//!
//! The backend computes each ticket's deadline from the hotel's subscription plan; the client
//! only compares it against the clock (or against `resolved_at` once work is done).

use std::fmt;

use chrono::{Duration, NaiveDateTime};

use crate::model::ticket::{TicketDto, TicketStatus};

/// Remaining time under which an active ticket is flagged as at risk
pub const AT_RISK_THRESHOLD_MINUTES: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlaStatus {
    /// Active ticket with more than the at-risk threshold left
    OnTrack,
    /// Active ticket about to pass its deadline
    AtRisk,
    /// Active ticket past its deadline
    Breached,
    /// Finished ticket resolved on time
    Met,
    /// Finished ticket resolved late
    Missed,
    NoDeadline,
}

impl SlaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::AtRisk => "At risk",
            Self::Breached => "Breached",
            Self::Met => "Met",
            Self::Missed => "Missed",
            Self::NoDeadline => "No SLA",
        }
    }

    /// Whether the deadline was or is being missed
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Breached | Self::Missed)
    }
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn sla_status(ticket: &TicketDto, now: NaiveDateTime) -> SlaStatus {
    let Some(deadline) = ticket.sla_deadline else {
        return SlaStatus::NoDeadline;
    };

    if matches!(ticket.status, TicketStatus::Resolved | TicketStatus::Closed) {
        // Without a resolution timestamp the last update is the best available proxy
        let finished_at = ticket.resolved_at.or(ticket.updated_at).unwrap_or(now);

        return if finished_at <= deadline {
            SlaStatus::Met
        } else {
            SlaStatus::Missed
        };
    }

    let remaining = deadline.signed_duration_since(now);

    if remaining < Duration::zero() {
        SlaStatus::Breached
    } else if remaining < Duration::minutes(AT_RISK_THRESHOLD_MINUTES) {
        SlaStatus::AtRisk
    } else {
        SlaStatus::OnTrack
    }
}

/// Describe the time left before a deadline, e.g. `3h 20m left` or `overdue by 15m`
pub fn format_remaining(deadline: NaiveDateTime, now: NaiveDateTime) -> String {
    let remaining = deadline.signed_duration_since(now);
    let overdue = remaining < Duration::zero();
    let span = format_span(if overdue { -remaining } else { remaining });

    if overdue {
        format!("overdue by {}", span)
    } else {
        format!("{} left", span)
    }
}

fn format_span(duration: Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
