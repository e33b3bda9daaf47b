use hotelfix::model::ticket::{CreatePublicTicketRequest, ImageUpload, TicketPriority};
use hotelfix_test_utils::{constant::TEST_HOTEL_ID, prelude::*};
use mockito::Matcher;

use crate::TestSetupExt;

fn request() -> CreatePublicTicketRequest {
    CreatePublicTicketRequest {
        hotel_id: TEST_HOTEL_ID,
        title: "Air conditioning not working".to_string(),
        description: "Room stays at 29 degrees".to_string(),
        priority: TicketPriority::High,
        category_id: Some(2),
        room_number: Some("312".to_string()),
        reporter_name: "Guest".to_string(),
        reporter_email: "guest@example.com".to_string(),
    }
}

#[tokio::test]
// Test a guest report is multipart with a JSON ticket part and image parts, without a token
async fn sends_multipart_report() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let body = serde_json::to_string(&factory::ticket(21, "OPEN", "HIGH"))?;
    let mock = test
        .server
        .mock("POST", "/tickets/public")
        .match_header("authorization", Matcher::Missing)
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="ticket""#.to_string()),
            Matcher::Regex(r#""roomNumber":"312""#.to_string()),
            Matcher::Regex(r#"name="images"; filename="ac.jpg""#.to_string()),
        ]))
        .with_status(201)
        .with_body(body)
        .create_async()
        .await;
    // A signed-in session must not leak into the guest endpoint
    let api = test.authenticated_api("CLIENT")?;

    let images = vec![ImageUpload {
        file_name: "ac.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: b"fake jpeg data".to_vec(),
    }];
    let result = api.create_public_ticket(&request(), &images).await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().ticket_number, "TK-0021");

    Ok(())
}

#[tokio::test]
// Test ticket lookup by number encodes the number into the path
async fn looks_up_by_ticket_number() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        "/tickets/public/TK%2D0021",
        200,
        &factory::ticket(21, "IN_PROGRESS", "HIGH"),
    )
    .await?;
    let api = test.api();

    let result = api.get_public_ticket(" TK-0021 ").await;

    test.assert_mocks().await;
    assert_eq!(result.unwrap().id, 21);

    Ok(())
}

#[tokio::test]
// Test an unknown ticket number reports the server's message
async fn unknown_ticket_number() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.server
        .mock("GET", "/tickets/public/NOPE")
        .with_status(404)
        .with_body(r#"{"error":"Ticket not found"}"#)
        .create_async()
        .await;
    let api = test.api();

    let result = api.get_public_ticket("NOPE").await;

    assert_eq!(result.unwrap_err().to_string(), "Ticket not found");

    Ok(())
}
