use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::auth::{AuthResponse, AuthUser, LoginRequest, RegisterRequest},
    service::{
        api::{Access, ApiService},
        session::AuthSession,
        storage::SessionStorage,
        transport::{HttpTransport, Method},
    },
};

impl<T, S> ApiService<T, S>
where
    T: HttpTransport,
    S: SessionStorage,
{
    /// Log in and persist the returned session.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Credentials accepted, token and user data stored
    /// - `Err(Error::ApiError)` - Credentials rejected; the message comes from the response body
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthUser, Error> {
        let response: AuthResponse = self
            .send_json(Method::Post, "/auth/login", Access::Public, request)
            .await?;

        tracing::info!(user_id = response.user_id, role = %response.role, "User logged in");

        AuthSession::insert(&self.storage, &response)
    }

    /// Register a hotel admin account along with its hotel, then persist the returned session
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthUser, Error> {
        let response: AuthResponse = self
            .send_json(Method::Post, "/auth/register", Access::Public, request)
            .await?;

        tracing::info!(user_id = response.user_id, "User registered");

        AuthSession::insert(&self.storage, &response)
    }

    /// Forget the stored session. The backend keeps no server-side session to revoke.
    pub fn logout(&self) {
        AuthSession::clear(&self.storage);
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        AuthSession::restore(&self.storage)
    }
}
