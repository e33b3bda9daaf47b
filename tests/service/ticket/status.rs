use hotelfix::{
    error::Error,
    model::ticket::{TicketDto, TicketStatus},
};
use hotelfix_test_utils::{constant::TEST_USER_ID, prelude::*};
use mockito::Matcher;
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test a status change is a PATCH with the acting user in the query
async fn patches_status_with_user_query() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let body = serde_json::to_string(&factory::ticket(5, "IN_PROGRESS", "HIGH"))?;
    let mock = test
        .server
        .mock("PATCH", "/tickets/5/status")
        .match_query(Matcher::UrlEncoded(
            "userId".to_string(),
            TEST_USER_ID.to_string(),
        ))
        .match_body(Matcher::Json(json!({ "status": "IN_PROGRESS" })))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    let api = test.authenticated_api("TECHNICIAN")?;

    let result = api
        .update_ticket_status(5, TicketStatus::InProgress, TEST_USER_ID)
        .await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().status, TicketStatus::InProgress);

    Ok(())
}

#[tokio::test]
// Test an allowed transition goes through
async fn transition_allowed_by_lifecycle() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let body = serde_json::to_string(&factory::ticket(5, "RESOLVED", "HIGH"))?;
    let mock = test
        .server
        .mock("PATCH", "/tickets/5/status")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    let api = test.authenticated_api("TECHNICIAN")?;
    let ticket: TicketDto = serde_json::from_value(factory::ticket(5, "PENDING", "HIGH"))?;

    let result = api
        .transition_ticket(&ticket, TicketStatus::Resolved, TEST_USER_ID)
        .await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().status, TicketStatus::Resolved);

    Ok(())
}

#[tokio::test]
// Test a transition the lifecycle forbids is refused without a request
async fn transition_refused_locally() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let api = test.authenticated_api("TECHNICIAN")?;
    let ticket: TicketDto = serde_json::from_value(factory::ticket(5, "CLOSED", "LOW"))?;

    let result = api
        .transition_ticket(&ticket, TicketStatus::InProgress, TEST_USER_ID)
        .await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::InvalidTransition {
            from: TicketStatus::Closed,
            to: TicketStatus::InProgress,
        })
    ));

    Ok(())
}
