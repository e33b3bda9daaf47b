use hotelfix::{error::Error, model::ticket::ImageUpload};
use hotelfix_test_utils::prelude::*;
use mockito::Matcher;

use crate::TestSetupExt;

#[tokio::test]
// Test deleting an image addresses it through the query string
async fn deletes_image_by_query() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("DELETE", "/tickets/4/images")
        .match_query(Matcher::UrlEncoded("imageId".to_string(), "31".to_string()))
        .with_status(204)
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.delete_ticket_image(4, 31).await;

    mock.assert_async().await;
    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
// Test uploading sends every file as an images part
async fn uploads_images() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let body = serde_json::to_string(&factory::ticket(4, "OPEN", "LOW"))?;
    let mock = test
        .server
        .mock("POST", "/tickets/4/images")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"filename="before.png""#.to_string()),
            Matcher::Regex(r#"filename="after.png""#.to_string()),
        ]))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    let api = test.authenticated_api("TECHNICIAN")?;

    let images: Vec<ImageUpload> = ["before.png", "after.png"]
        .into_iter()
        .map(|name| ImageUpload {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: b"fake png data".to_vec(),
        })
        .collect();
    let result = api.upload_ticket_images(4, &images).await;

    mock.assert_async().await;
    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
// Test an empty selection is refused without a request
async fn refuses_empty_upload() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let api = test.authenticated_api("TECHNICIAN")?;

    let result = api.upload_ticket_images(4, &[]).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(Error::ParseError(_))));

    Ok(())
}
