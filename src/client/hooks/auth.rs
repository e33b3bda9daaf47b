use dioxus::prelude::*;

use crate::client::store::auth::AuthState;

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
