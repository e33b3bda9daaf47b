use hotelfix::model::user::TechnicianRequest;
use hotelfix_test_utils::{
    constant::{TEST_HOTEL_ID, TEST_TECHNICIAN_ID},
    prelude::*,
};
use mockito::Matcher;
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test a hotel's technicians are listed from the hotel-scoped path
async fn lists_hotel_technicians() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        &format!("/users/hotel/{}/technicians", TEST_HOTEL_ID),
        200,
        &json!([{
            "id": TEST_TECHNICIAN_ID,
            "email": "tom@seaview.example",
            "fullName": "Tom Tech",
            "hotelId": TEST_HOTEL_ID,
            "specialties": ["plumbing"],
            "activeTickets": 2
        }]),
    )
    .await?;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.get_hotel_technicians(TEST_HOTEL_ID).await;

    test.assert_mocks().await;
    let technicians = result.unwrap();
    assert_eq!(technicians[0].id, TEST_TECHNICIAN_ID);
    assert_eq!(technicians[0].active_tickets, 2);

    Ok(())
}

#[tokio::test]
// Test a technician account is created with POST to the technicians path
async fn creates_technician() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/users/technicians")
        .match_body(Matcher::PartialJson(json!({
            "email": "tom@seaview.example",
            "fullName": "Tom Tech",
            "hotelId": TEST_HOTEL_ID,
            "specialties": ["plumbing", "electrical"]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": TEST_TECHNICIAN_ID,
                "email": "tom@seaview.example",
                "fullName": "Tom Tech",
                "hotelId": TEST_HOTEL_ID
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;

    let request = TechnicianRequest {
        email: "tom@seaview.example".to_string(),
        password: "temporary-pass".to_string(),
        full_name: "Tom Tech".to_string(),
        hotel_id: TEST_HOTEL_ID,
        phone: None,
        specialties: vec!["plumbing".to_string(), "electrical".to_string()],
    };
    let result = api.create_technician(&request).await;

    mock.assert_async().await;
    let technician = result.unwrap();
    assert!(technician.specialties.is_empty());

    Ok(())
}

#[tokio::test]
// Test a technician is removed through the user path
async fn deletes_technician() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("DELETE", format!("/users/{}", TEST_TECHNICIAN_ID).as_str())
        .with_status(204)
        .expect(1)
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.delete_user(TEST_TECHNICIAN_ID).await;

    mock.assert_async().await;
    assert!(result.is_ok());

    Ok(())
}
