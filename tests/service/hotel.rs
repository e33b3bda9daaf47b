use hotelfix::model::hotel::{CategoryRequest, HotelRequest, PlanRequest};
use hotelfix_test_utils::{
    constant::{TEST_HOTEL_ID, TEST_TOKEN},
    prelude::*,
};
use mockito::Matcher;
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test hotels are listed with the bearer token attached
async fn lists_hotels() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("GET", "/hotels")
        .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"id": TEST_HOTEL_ID, "name": "Seaview", "planName": "Pro"},
                {"id": 4, "name": "Harbour Inn", "active": false}
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let api = test.authenticated_api("SUPERADMIN")?;

    let result = api.get_hotels().await;

    mock.assert_async().await;
    let hotels = result.unwrap();
    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0].plan_name.as_deref(), Some("Pro"));
    assert!(hotels[0].active);
    assert!(!hotels[1].active);

    Ok(())
}

#[tokio::test]
// Test an update is sent as PUT to the hotel's path with a camelCase body
async fn updates_hotel() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("PUT", format!("/hotels/{}", TEST_HOTEL_ID).as_str())
        .match_body(Matcher::PartialJson(json!({
            "name": "Seaview Resort",
            "contactEmail": "desk@seaview.example",
            "active": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": TEST_HOTEL_ID, "name": "Seaview Resort"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let api = test.authenticated_api("SUPERADMIN")?;

    let request = HotelRequest {
        name: "Seaview Resort".to_string(),
        contact_email: Some("desk@seaview.example".to_string()),
        active: true,
        ..HotelRequest::default()
    };
    let result = api.update_hotel(TEST_HOTEL_ID, &request).await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().name, "Seaview Resort");

    Ok(())
}

#[tokio::test]
// Test a hotel is deleted with an empty 204 response
async fn deletes_hotel() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("DELETE", format!("/hotels/{}", TEST_HOTEL_ID).as_str())
        .with_status(204)
        .expect(1)
        .create_async()
        .await;
    let api = test.authenticated_api("SUPERADMIN")?;

    let result = api.delete_hotel(TEST_HOTEL_ID).await;

    mock.assert_async().await;
    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
// Test plans are fetched without a session for the registration page
async fn lists_plans_publicly() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("GET", "/plans")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"id": 1, "name": "Basic", "monthlyPrice": 19.0, "slaHours": 48}]).to_string())
        .expect(1)
        .create_async()
        .await;
    let api = test.api();

    let result = api.get_plans().await;

    mock.assert_async().await;
    let plans = result.unwrap();
    assert_eq!(plans[0].sla_hours, Some(48));

    Ok(())
}

#[tokio::test]
// Test a plan is created with POST and optional fields left out
async fn creates_plan() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/plans")
        .match_body(Matcher::Json(json!({"name": "Pro", "monthlyPrice": 49.0, "slaHours": 24})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": 2, "name": "Pro", "monthlyPrice": 49.0, "slaHours": 24}).to_string())
        .expect(1)
        .create_async()
        .await;
    let api = test.authenticated_api("SUPERADMIN")?;

    let request = PlanRequest {
        name: "Pro".to_string(),
        monthly_price: 49.0,
        sla_hours: Some(24),
        ..PlanRequest::default()
    };
    let result = api.create_plan(&request).await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().id, 2);

    Ok(())
}

#[tokio::test]
// Test categories are listed and a new one is created
async fn lists_and_creates_categories() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        "/categories",
        200,
        &json!([{"id": 1, "name": "Plumbing"}, {"id": 2, "name": "Electrical", "icon": "bolt"}]),
    )
    .await?;
    test.with_json_mock("POST", "/categories", 201, &json!({"id": 3, "name": "HVAC"}))
        .await?;
    let api = test.authenticated_api("ADMIN")?;

    let categories = api.get_categories().await;
    let created = api
        .create_category(&CategoryRequest {
            name: "HVAC".to_string(),
            ..CategoryRequest::default()
        })
        .await;

    test.assert_mocks().await;
    assert_eq!(categories.unwrap()[1].icon.as_deref(), Some("bolt"));
    assert_eq!(created.unwrap().name, "HVAC");

    Ok(())
}
