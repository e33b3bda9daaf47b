//! REST service layer.
//!
//! [`ApiService`](api::ApiService) owns one typed async method per backend endpoint. It is
//! generic over the HTTP transport (reqwasm in the browser, reqwest natively) and over the
//! storage that persists the signed-in session, so the same code runs in the web client,
//! the desktop client and the test suite.

pub mod api;
pub mod session;
pub mod storage;
pub mod transport;

pub use api::ApiService;
pub use session::AuthSession;
pub use storage::{MemoryStorage, SessionStorage};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, MultipartPart, RequestBody};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use transport::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;

/// Transport used by the running client on this target
#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;

/// Session storage used by the running client on this target
#[cfg(target_arch = "wasm32")]
pub type DefaultStorage = LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultStorage = MemoryStorage;

/// The service type shared through the Dioxus context
pub type AppApi = ApiService<DefaultTransport, DefaultStorage>;

impl AppApi {
    /// Build the service for the running client from its configuration
    pub fn from_config(config: &crate::config::ClientConfig) -> Self {
        ApiService::new(
            config.api_base_url.clone(),
            DefaultTransport::default(),
            DefaultStorage::default(),
        )
    }
}
