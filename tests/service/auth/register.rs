use hotelfix::model::auth::{RegisterRequest, Role};
use hotelfix_test_utils::{constant::TEST_HOTEL_ID, prelude::*};
use mockito::Matcher;
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test registration sends camelCase fields and signs the new admin in
async fn registers_and_signs_in() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let body = serde_json::to_string(&factory::auth_response("ADMIN"))?;
    let mock = test
        .server
        .mock("POST", "/auth/register")
        .match_body(Matcher::PartialJson(json!({
            "fullName": "Ana Admin",
            "hotelName": "Seaview",
            "planId": 2,
        })))
        .with_status(201)
        .with_body(body)
        .create_async()
        .await;
    let api = test.api();

    let request = RegisterRequest {
        email: "admin@seaview.example".to_string(),
        password: "correct horse battery".to_string(),
        full_name: "Ana Admin".to_string(),
        hotel_name: "Seaview".to_string(),
        plan_id: Some(2),
    };
    let result = api.register(&request).await;

    mock.assert_async().await;
    let user = result.unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.hotel_id, Some(TEST_HOTEL_ID));
    assert!(api.current_user().is_some());

    Ok(())
}

#[tokio::test]
// Test a conflict keeps the user signed out
async fn conflict_leaves_session_empty() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "POST",
        "/auth/register",
        409,
        &json!({ "error": "Email already registered" }),
    )
    .await?;
    let api = test.api();

    let request = RegisterRequest {
        email: "admin@seaview.example".to_string(),
        password: "correct horse battery".to_string(),
        full_name: "Ana Admin".to_string(),
        hotel_name: "Seaview".to_string(),
        plan_id: None,
    };
    let result = api.register(&request).await;

    test.assert_mocks().await;
    assert_eq!(result.unwrap_err().to_string(), "Email already registered");
    assert!(api.current_user().is_none());

    Ok(())
}
