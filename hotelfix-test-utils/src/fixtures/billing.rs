use serde_json::{json, Value};

use crate::constant::TEST_HOTEL_ID;

pub fn payment(id: i64, status: &str, amount: f64) -> Value {
    json!({
        "id": id,
        "hotelId": TEST_HOTEL_ID,
        "hotelName": "Seaview",
        "planName": "Pro",
        "amount": amount,
        "currency": "EUR",
        "status": status,
        "createdAt": "2024-03-01T09:00:00",
        "paidAt": if status == "PAID" { json!("2024-03-02T10:00:00") } else { Value::Null },
    })
}
