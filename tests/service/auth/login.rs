use hotelfix::{
    error::{ApiError, Error},
    model::auth::{LoginRequest, Role},
    service::AuthSession,
};
use hotelfix_test_utils::{
    constant::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, TEST_USER_ID},
    prelude::*,
};
use mockito::Matcher;
use serde_json::json;

use crate::TestSetupExt;

fn credentials() -> LoginRequest {
    LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
// Test successful login stores the token and user data
async fn stores_session_on_success() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let body = serde_json::to_string(&factory::auth_response("ADMIN"))?;
    let mock = test
        .server
        .mock("POST", "/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
        })))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    let api = test.api();

    let result = api.login(&credentials()).await;

    mock.assert_async().await;
    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.user_id, TEST_USER_ID);
    assert_eq!(user.role, Role::Admin);

    assert_eq!(AuthSession::token(api.storage()).as_deref(), Some(TEST_TOKEN));
    assert_eq!(api.current_user(), Some(user));

    Ok(())
}

#[tokio::test]
// Test rejected credentials surface the message from the response body
async fn rejects_with_message_from_body() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "POST",
        "/auth/login",
        400,
        &json!({ "message": "Invalid email or password" }),
    )
    .await?;
    let api = test.api();

    let result = api.login(&credentials()).await;

    test.assert_mocks().await;
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert_eq!(error.to_string(), "Invalid email or password");
    assert!(matches!(
        error,
        Error::ApiError(ApiError::RequestFailed { status: 400, .. })
    ));
    assert!(api.storage().is_empty());

    Ok(())
}

#[tokio::test]
// Test a 401 on login is a plain failure rather than an expired session
async fn unauthorized_login_is_not_session_expiry() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body("Bad credentials")
        .create_async()
        .await;
    let api = test.api();

    let result = api.login(&credentials()).await;

    let error = result.unwrap_err();
    assert!(!error.is_unauthorized());
    assert_eq!(error.to_string(), "Bad credentials");

    Ok(())
}

#[tokio::test]
// Test an empty error body falls back to a message naming the status
async fn falls_back_to_status_message() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.server
        .mock("POST", "/auth/login")
        .with_status(503)
        .create_async()
        .await;
    let api = test.api();

    let result = api.login(&credentials()).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Request failed with status 503"
    );

    Ok(())
}

#[tokio::test]
// Test logout clears the stored session
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestSetup::new().await;
    let api = test.authenticated_api("TECHNICIAN")?;
    assert!(api.current_user().is_some());

    api.logout();

    assert!(api.current_user().is_none());
    assert!(api.storage().is_empty());

    Ok(())
}
