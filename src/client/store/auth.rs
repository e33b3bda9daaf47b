use dioxus::prelude::*;
use hotelfix::{model::auth::AuthUser, service::AppApi};

/// The signed-in user, shared through the context.
///
/// Mirrors what [`AuthSession`](hotelfix::service::AuthSession) persisted; the API service
/// keeps the storage in sync, this signal keeps the UI in sync.
#[derive(Clone, Copy)]
pub struct AuthState {
    user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn restore(api: &AppApi) -> Self {
        Self {
            user: Signal::new(api.current_user()),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn set(&self, user: Option<AuthUser>) {
        let mut signal = self.user;
        signal.set(user);
    }
}
