use dioxus::prelude::*;
use dioxus_logger::tracing;
use hotelfix::{config::ClientConfig, service::AppApi};

use crate::client::{
    components::ToastStack,
    router::Route,
    store::{auth::AuthState, toast::Toasts},
};

fn load_config() -> ClientConfig {
    ClientConfig::load().unwrap_or_else(|e| {
        tracing::error!("{}; falling back to default configuration", e);
        ClientConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    let api = use_context_provider(|| AppApi::from_config(&config));
    use_context_provider(|| AuthState::restore(&api));
    use_context_provider(Toasts::new);

    rsx! {
        document::Title { "Hotelfix" }
        Router::<Route> {}
        ToastStack {}
    }
}
