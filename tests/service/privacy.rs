use hotelfix::model::privacy::{
    ConsentRequest, ConsentType, DeletionRequestStatus, ProcessDeletionRequest,
};
use hotelfix_test_utils::{constant::TEST_USER_ID, prelude::*};
use mockito::Matcher;
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test consents are fetched for the given user
async fn lists_consents() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("GET", "/privacy/consents")
        .match_query(Matcher::UrlEncoded("userId".to_string(), TEST_USER_ID.to_string()))
        .with_status(200)
        .with_body(serde_json::to_string(&json!([{
            "id": 1,
            "userId": TEST_USER_ID,
            "consentType": "MARKETING",
            "granted": true,
            "updatedAt": "2024-03-01T09:00:00",
        }]))?)
        .create_async()
        .await;
    let api = test.authenticated_api("CLIENT")?;

    let result = api.get_consents(TEST_USER_ID).await;

    mock.assert_async().await;
    let consents = result.unwrap();
    assert_eq!(consents[0].consent_type, ConsentType::Marketing);
    assert!(consents[0].granted);

    Ok(())
}

#[tokio::test]
// Test a consent change posts the consent type in wire casing
async fn updates_consent() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/privacy/consents")
        .match_body(Matcher::PartialJson(json!({
            "consentType": "ANALYTICS",
            "granted": false,
        })))
        .with_status(200)
        .with_body(serde_json::to_string(&json!({
            "id": 2,
            "userId": TEST_USER_ID,
            "consentType": "ANALYTICS",
            "granted": false,
            "updatedAt": "2024-03-01T09:00:00",
        }))?)
        .create_async()
        .await;
    let api = test.authenticated_api("CLIENT")?;

    let request = ConsentRequest {
        user_id: TEST_USER_ID,
        consent_type: ConsentType::Analytics,
        granted: false,
    };
    let result = api.update_consent(&request).await;

    mock.assert_async().await;
    assert!(!result.unwrap().granted);

    Ok(())
}

#[tokio::test]
// Test the data export is handed back as pretty-printed JSON
async fn exports_user_data_as_json() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.server
        .mock("GET", "/privacy/export")
        .match_query(Matcher::UrlEncoded("userId".to_string(), TEST_USER_ID.to_string()))
        .with_status(200)
        .with_body(r#"{"user":{"email":"guest@example.com"},"tickets":[]}"#)
        .create_async()
        .await;
    let api = test.authenticated_api("CLIENT")?;

    let result = api.export_user_data(TEST_USER_ID).await;

    let document = result.unwrap();
    assert!(document.contains('\n'));
    let parsed: serde_json::Value = serde_json::from_str(&document)?;
    assert_eq!(parsed["user"]["email"], "guest@example.com");

    Ok(())
}

#[tokio::test]
// Test an admin decision on a deletion request
async fn processes_deletion_request() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/privacy/deletion-requests/9/process")
        .match_body(Matcher::Json(json!({
            "approve": true,
            "adminNotes": "Verified by phone",
        })))
        .with_status(200)
        .with_body(serde_json::to_string(&json!({
            "id": 9,
            "userId": 40,
            "status": "APPROVED",
            "requestedAt": "2024-03-01T09:00:00",
            "processedAt": "2024-03-02T09:00:00",
            "adminNotes": "Verified by phone",
        }))?)
        .create_async()
        .await;
    let api = test.authenticated_api("ADMIN")?;

    let request = ProcessDeletionRequest {
        approve: true,
        admin_notes: Some("Verified by phone".to_string()),
    };
    let result = api.process_deletion_request(9, &request).await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().status, DeletionRequestStatus::Approved);

    Ok(())
}
