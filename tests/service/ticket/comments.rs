use hotelfix::model::ticket::CreateCommentRequest;
use hotelfix_test_utils::{constant::TEST_USER_ID, prelude::*};
use mockito::Matcher;
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test comments of a ticket are listed in server order
async fn lists_comments() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        "/tickets/6/comments",
        200,
        &json!([
            factory::comment(1, 6, "Technician on the way"),
            factory::comment(2, 6, "Fixed the thermostat"),
        ]),
    )
    .await?;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.get_ticket_comments(6).await;

    test.assert_mocks().await;
    let comments = result.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].content, "Fixed the thermostat");

    Ok(())
}

#[tokio::test]
// Test posting a comment sends the author and internal flag
async fn adds_comment() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/tickets/6/comments")
        .match_body(Matcher::Json(json!({
            "content": "Part ordered",
            "authorId": TEST_USER_ID,
            "internal": true,
        })))
        .with_status(201)
        .with_body(serde_json::to_string(&factory::comment(3, 6, "Part ordered"))?)
        .create_async()
        .await;
    let api = test.authenticated_api("TECHNICIAN")?;

    let request = CreateCommentRequest {
        content: "Part ordered".to_string(),
        author_id: Some(TEST_USER_ID),
        internal: true,
    };
    let result = api.add_ticket_comment(6, &request).await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().id, 3);

    Ok(())
}
