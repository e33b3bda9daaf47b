use std::cell::RefCell;

use hotelfix::util::notification::{notification_id, poll_urgent_tickets, NotificationCenter};
use hotelfix_test_utils::{constant::TEST_HOTEL_ID, prelude::*};
use serde_json::json;

use crate::TestSetupExt;

fn tickets_path() -> String {
    format!("/tickets/hotel/{}", TEST_HOTEL_ID)
}

#[tokio::test]
// Test only urgent, open, unassigned tickets raise notifications
async fn alerts_on_urgent_unassigned_tickets() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mut assigned = factory::urgent_unassigned_ticket(2);
    assigned["assignedToId"] = 11.into();
    test.with_json_mock(
        "GET",
        &tickets_path(),
        200,
        &json!([
            factory::urgent_unassigned_ticket(1),
            assigned,
            factory::ticket(3, "OPEN", "HIGH"),
            factory::ticket(4, "IN_PROGRESS", "URGENT"),
        ]),
    )
    .await?;
    let api = test.authenticated_api("ADMIN")?;
    let center = RefCell::new(NotificationCenter::new());

    let result = poll_urgent_tickets(&api, TEST_HOTEL_ID, &center).await;

    test.assert_mocks().await;
    let fresh = result.unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].id, notification_id(1));
    assert_eq!(center.borrow().unread_count(), 1);
    assert!(!center.borrow().is_polling());

    Ok(())
}

#[tokio::test]
// Test repeated polls of the same tickets never duplicate a notification
async fn repeated_polls_do_not_duplicate() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let body = serde_json::to_string(&json!([factory::urgent_unassigned_ticket(1)]))?;
    let mock = test
        .server
        .mock("GET", tickets_path().as_str())
        .with_status(200)
        .with_body(body)
        .expect(2)
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;
    let center = RefCell::new(NotificationCenter::new());

    let first = poll_urgent_tickets(&api, TEST_HOTEL_ID, &center).await;
    let second = poll_urgent_tickets(&api, TEST_HOTEL_ID, &center).await;

    mock.assert_async().await;
    assert_eq!(first.unwrap().len(), 1);
    assert!(second.unwrap().is_empty());
    assert_eq!(center.borrow().notifications().len(), 1);

    Ok(())
}

#[tokio::test]
// Test a poll is skipped without a request while another one is in flight
async fn skips_while_poll_in_flight() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("GET", tickets_path().as_str())
        .expect(0)
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;
    let center = RefCell::new(NotificationCenter::new());
    assert!(center.borrow_mut().begin_poll());

    let result = poll_urgent_tickets(&api, TEST_HOTEL_ID, &center).await;

    mock.assert_async().await;
    assert!(result.unwrap().is_empty());
    assert!(center.borrow().is_polling());

    Ok(())
}

#[tokio::test]
// Test a failed poll releases the poll slot and keeps existing notifications
async fn failed_poll_releases_slot() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        &tickets_path(),
        500,
        &json!({ "message": "Database unavailable" }),
    )
    .await?;
    let api = test.authenticated_api("ADMIN")?;
    let center = RefCell::new(NotificationCenter::new());

    let result = poll_urgent_tickets(&api, TEST_HOTEL_ID, &center).await;

    test.assert_mocks().await;
    assert_eq!(result.unwrap_err().to_string(), "Database unavailable");
    assert!(!center.borrow().is_polling());

    Ok(())
}
