use dioxus::prelude::*;

use crate::client::{hooks::use_auth, router::Route};

#[component]
pub fn HotelfixTitle() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl", "Hotelfix" }
                p { class: "text-xs", "v0.1.0-alpha.1" }
            }
        }
    )
}

/// Navbar of the public pages
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                HotelfixTitle {}
            }
            div {
                class: "navbar-end flex gap-2",
                Link { to: Route::TrackSearch {}, class: "btn btn-ghost", "Track a ticket" }
                if auth.is_authenticated() {
                    Link { to: Route::Dashboard {}, class: "btn btn-primary", "Open dashboard" }
                } else {
                    Link { to: Route::Login {}, class: "btn btn-outline", "Log in" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
