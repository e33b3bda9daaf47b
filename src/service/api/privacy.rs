use crate::{
    error::Error,
    model::privacy::{
        ConsentDto, ConsentRequest, DeletionRequestDto, DeletionRequestRequest,
        ProcessDeletionRequest,
    },
    service::{
        api::{with_query, Access, ApiService},
        storage::SessionStorage,
        transport::{HttpTransport, Method, RequestBody},
    },
};

impl<T, S> ApiService<T, S>
where
    T: HttpTransport,
    S: SessionStorage,
{
    pub async fn get_consents(&self, user_id: i64) -> Result<Vec<ConsentDto>, Error> {
        let path = with_query("/privacy/consents", &[("userId", user_id.to_string())]);

        self.get_json(&path, Access::Authenticated).await
    }

    pub async fn update_consent(&self, request: &ConsentRequest) -> Result<ConsentDto, Error> {
        self.send_json(
            Method::Post,
            "/privacy/consents",
            Access::Authenticated,
            request,
        )
        .await
    }

    /// Everything the backend holds about a user, pretty-printed for download.
    ///
    /// The document's shape is owned by the backend, so it is passed through untyped.
    pub async fn export_user_data(&self, user_id: i64) -> Result<String, Error> {
        let path = with_query("/privacy/export", &[("userId", user_id.to_string())]);

        let response = self
            .execute(Method::Get, &path, Access::Authenticated, RequestBody::Empty)
            .await?;

        let document: serde_json::Value = super::decode(&path, &response)?;

        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub async fn request_deletion(
        &self,
        request: &DeletionRequestRequest,
    ) -> Result<DeletionRequestDto, Error> {
        self.send_json(
            Method::Post,
            "/privacy/deletion-requests",
            Access::Authenticated,
            request,
        )
        .await
    }

    /// Pending and processed deletion requests, admin only
    pub async fn get_deletion_requests(&self) -> Result<Vec<DeletionRequestDto>, Error> {
        self.get_json("/privacy/deletion-requests", Access::Authenticated)
            .await
    }

    pub async fn process_deletion_request(
        &self,
        request_id: i64,
        request: &ProcessDeletionRequest,
    ) -> Result<DeletionRequestDto, Error> {
        self.send_json(
            Method::Post,
            &format!("/privacy/deletion-requests/{}/process", request_id),
            Access::Authenticated,
            request,
        )
        .await
    }
}
