use crate::{
    error::Error,
    model::{audit::AuditLogDto, billing::PaymentDto},
    service::{
        api::{Access, ApiService},
        storage::SessionStorage,
        transport::HttpTransport,
    },
};

impl<T, S> ApiService<T, S>
where
    T: HttpTransport,
    S: SessionStorage,
{
    /// Subscription payments of one hotel
    pub async fn get_hotel_payments(&self, hotel_id: i64) -> Result<Vec<PaymentDto>, Error> {
        self.get_json(&format!("/payments/hotel/{}", hotel_id), Access::Authenticated)
            .await
    }

    /// Payments across every tenant, super-admin only
    pub async fn get_payments(&self) -> Result<Vec<PaymentDto>, Error> {
        self.get_json("/payments", Access::Authenticated).await
    }

    pub async fn get_audit_logs(&self) -> Result<Vec<AuditLogDto>, Error> {
        self.get_json("/audit-logs", Access::Authenticated).await
    }
}
