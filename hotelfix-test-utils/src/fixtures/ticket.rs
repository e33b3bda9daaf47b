use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::constant::TEST_HOTEL_ID;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A ticket created an hour ago with a deadline a day out
pub fn ticket(id: i64, status: &str, priority: &str) -> Value {
    let created_at = Utc::now().naive_utc() - Duration::hours(1);
    let sla_deadline = created_at + Duration::hours(24);

    json!({
        "id": id,
        "ticketNumber": format!("TK-{:04}", id),
        "title": "Air conditioning not working",
        "description": "Room stays at 29 degrees",
        "status": status,
        "priority": priority,
        "hotelId": TEST_HOTEL_ID,
        "hotelName": "Seaview",
        "categoryId": 2,
        "categoryName": "HVAC",
        "roomNumber": "312",
        "reporterName": "Guest",
        "reporterEmail": "guest@example.com",
        "assignedToId": null,
        "assignedToName": null,
        "slaDeadline": sla_deadline.format(DATETIME_FORMAT).to_string(),
        "createdAt": created_at.format(DATETIME_FORMAT).to_string(),
        "updatedAt": null,
        "resolvedAt": null,
        "images": [],
    })
}

pub fn urgent_unassigned_ticket(id: i64) -> Value {
    ticket(id, "OPEN", "URGENT")
}

pub fn comment(id: i64, ticket_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "ticketId": ticket_id,
        "content": content,
        "authorName": "Ana Admin",
        "authorId": 7,
        "internal": false,
        "createdAt": Utc::now().naive_utc().format(DATETIME_FORMAT).to_string(),
    })
}
