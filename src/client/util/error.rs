use dioxus::prelude::*;
use hotelfix::error::Error;

use crate::client::{
    router::Route,
    store::{auth::AuthState, toast::Toasts},
};

/// Returns a handler that surfaces an error as a toast.
///
/// An expired session additionally drops the signed-in user and sends them to the login page.
pub fn use_error_handler() -> impl Fn(Error) + Copy {
    let auth = use_context::<AuthState>();
    let toasts = use_context::<Toasts>();
    let nav = use_navigator();

    move |error: Error| {
        toasts.error(error.to_string());

        if error.is_unauthorized() {
            auth.set(None);
            nav.push(Route::Login {});
        }
    }
}
