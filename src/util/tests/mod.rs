mod notification;
mod report;

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::ticket::{TicketDto, TicketPriority, TicketStatus};

/// A date-time on 2024-03-01 at the given hour and minute
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    on_day(1, hour, minute)
}

/// A date-time in March 2024
pub fn on_day(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap()
}

/// An open, unassigned, medium priority ticket created at 08:00
pub fn ticket(id: i64) -> TicketDto {
    TicketDto {
        id,
        ticket_number: format!("TK-{:04}", id),
        title: "Leaking tap".to_string(),
        description: "Bathroom tap drips all night".to_string(),
        status: TicketStatus::Open,
        priority: TicketPriority::Medium,
        hotel_id: 1,
        hotel_name: Some("Seaview".to_string()),
        category_id: Some(2),
        category_name: Some("Plumbing".to_string()),
        room_number: Some("204".to_string()),
        reporter_name: Some("Guest".to_string()),
        reporter_email: Some("guest@example.com".to_string()),
        assigned_to_id: None,
        assigned_to_name: None,
        sla_deadline: None,
        created_at: at(8, 0),
        updated_at: None,
        resolved_at: None,
        images: Vec::new(),
    }
}

pub fn urgent_ticket(id: i64) -> TicketDto {
    TicketDto {
        priority: TicketPriority::Urgent,
        ..ticket(id)
    }
}
