use hotelfix_test_utils::{
    constant::{TEST_TECHNICIAN_ID, TEST_USER_ID},
    prelude::*,
};
use mockito::Matcher;

use crate::TestSetupExt;

#[tokio::test]
// Test assignment passes technician and acting user as query parameters
async fn assigns_technician() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mut assigned = factory::ticket(8, "OPEN", "URGENT");
    assigned["assignedToId"] = TEST_TECHNICIAN_ID.into();
    assigned["assignedToName"] = "Tomas Tech".into();
    let mock = test
        .server
        .mock("PATCH", "/tickets/8/assign")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("technicianId".to_string(), TEST_TECHNICIAN_ID.to_string()),
            Matcher::UrlEncoded("userId".to_string(), TEST_USER_ID.to_string()),
        ]))
        .with_status(200)
        .with_body(serde_json::to_string(&assigned)?)
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.assign_ticket(8, TEST_TECHNICIAN_ID, TEST_USER_ID).await;

    mock.assert_async().await;
    let ticket = result.unwrap();
    assert!(ticket.is_assigned());
    assert_eq!(ticket.assigned_to_name.as_deref(), Some("Tomas Tech"));

    Ok(())
}
