use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_FULL_NAME, TEST_HOTEL_ID, TEST_TOKEN, TEST_USER_ID};

/// Body of a successful `/auth/login` or `/auth/register` for a user with `role`
pub fn auth_response(role: &str) -> Value {
    let hotel_id = if role == "SUPERADMIN" {
        Value::Null
    } else {
        json!(TEST_HOTEL_ID)
    };

    json!({
        "token": TEST_TOKEN,
        "email": TEST_EMAIL,
        "userId": TEST_USER_ID,
        "fullName": TEST_FULL_NAME,
        "role": role,
        "hotelId": hotel_id,
    })
}
