use hotelfix::error::{ApiError, Error};
use hotelfix_test_utils::{
    constant::{TEST_HOTEL_ID, TEST_TOKEN},
    prelude::*,
};
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test authenticated requests carry the stored bearer token
async fn sends_bearer_token() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("GET", format!("/tickets/hotel/{}", TEST_HOTEL_ID).as_str())
        .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.get_hotel_tickets(TEST_HOTEL_ID).await;

    mock.assert_async().await;
    assert!(result.unwrap().is_empty());

    Ok(())
}

#[tokio::test]
// Test a 401 on an authenticated request clears both session keys
async fn expired_session_is_cleared() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        &format!("/tickets/hotel/{}", TEST_HOTEL_ID),
        401,
        &json!({ "message": "Token expired" }),
    )
    .await?;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.get_hotel_tickets(TEST_HOTEL_ID).await;

    test.assert_mocks().await;
    let error = result.unwrap_err();
    assert!(matches!(error, Error::ApiError(ApiError::Unauthorized)));
    assert!(error.is_unauthorized());
    assert!(api.storage().is_empty());
    assert!(api.current_user().is_none());

    Ok(())
}

#[tokio::test]
// Test a 403 keeps the session and reports the server's message
async fn forbidden_keeps_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        "/audit-logs",
        403,
        &json!({ "error": "Super admin only" }),
    )
    .await?;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.get_audit_logs().await;

    let error = result.unwrap_err();
    assert_eq!(error.to_string(), "Super admin only");
    assert!(!error.is_unauthorized());
    assert!(api.current_user().is_some());

    Ok(())
}

#[tokio::test]
// Test a body that doesn't match the expected shape reports a decode error
async fn malformed_body_is_decode_error() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.server
        .mock("GET", "/hotels")
        .with_status(200)
        .with_body(r#"{"not":"a list"}"#)
        .create_async()
        .await;
    let api = test.authenticated_api("SUPERADMIN")?;

    let result = api.get_hotels().await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::Decode { .. }))
    ));

    Ok(())
}
