use hotelfix::{model::billing::PaymentStatus, util::report::RevenueReport};
use hotelfix_test_utils::{constant::TEST_HOTEL_ID, prelude::*};
use serde_json::json;

use crate::TestSetupExt;

#[tokio::test]
// Test hotel payments decode and feed the revenue report
async fn hotel_payments_feed_revenue() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.with_json_mock(
        "GET",
        &format!("/payments/hotel/{}", TEST_HOTEL_ID),
        200,
        &json!([
            factory::payment(1, "PAID", 49.0),
            factory::payment(2, "PAID", 49.0),
            factory::payment(3, "PENDING", 49.0),
        ]),
    )
    .await?;
    let api = test.authenticated_api("ADMIN")?;

    let result = api.get_hotel_payments(TEST_HOTEL_ID).await;

    test.assert_mocks().await;
    let payments = result.unwrap();
    assert_eq!(payments[2].status, PaymentStatus::Pending);

    let report = RevenueReport::from_payments(&payments);
    assert_eq!(report.total_paid, 98.0);
    assert_eq!(report.outstanding, 49.0);
    assert_eq!(report.paid_per_month.get(&(2024, 3)), Some(&98.0));

    Ok(())
}
