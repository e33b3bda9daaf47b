use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::auth::{AuthResponse, AuthUser},
    service::storage::SessionStorage,
};

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const USER_DATA_KEY: &str = "user_data";

/// Accessors for the session persisted in [`SessionStorage`].
pub struct AuthSession;

impl AuthSession {
    /// Persist token and user data after a successful login or registration
    pub fn insert<S: SessionStorage>(storage: &S, response: &AuthResponse) -> Result<AuthUser, Error> {
        let user = AuthUser::from(response);
        let user_data = serde_json::to_string(&user)?;

        storage.set_item(AUTH_TOKEN_KEY, &response.token);
        storage.set_item(USER_DATA_KEY, &user_data);

        Ok(user)
    }

    /// Get the bearer token, if any
    pub fn token<S: SessionStorage>(storage: &S) -> Option<String> {
        storage
            .get_item(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Get the signed-in user, if any
    pub fn user<S: SessionStorage>(storage: &S) -> Result<Option<AuthUser>, Error> {
        storage
            .get_item(USER_DATA_KEY)
            .map(|user_data| {
                serde_json::from_str::<AuthUser>(&user_data).map_err(|e| {
                    Error::ParseError(format!("Failed to parse stored user data: {}", e))
                })
            })
            .transpose()
    }

    /// Get the signed-in user, discarding a session whose stored data can't be read
    pub fn restore<S: SessionStorage>(storage: &S) -> Option<AuthUser> {
        if Self::token(storage).is_none() {
            return None;
        }

        match Self::user(storage) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("{}; clearing stored session", e);
                Self::clear(storage);

                None
            }
        }
    }

    pub fn clear<S: SessionStorage>(storage: &S) {
        storage.remove_item(AUTH_TOKEN_KEY);
        storage.remove_item(USER_DATA_KEY);
    }
}
