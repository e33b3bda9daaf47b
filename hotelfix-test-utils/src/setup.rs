use mockito::{Mock, Server, ServerGuard};
use serde_json::Value;

use crate::error::TestError;

/// A mock backend for one test.
///
/// The service under test is pointed at [`TestSetup::url`]; mocks registered through the
/// helpers are kept alive in `mocks` for the duration of the test.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL to hand to the API service
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Register a mock answering `method path` with a JSON body, expected exactly once.
    ///
    /// Query strings are matched separately by mockito, so `path` must not contain one; use
    /// the returned mock's matchers through [`Self::server`] directly when the query matters.
    pub async fn with_json_mock(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
    ) -> Result<&mut Self, TestError> {
        let body = serde_json::to_string(body)?;

        let mock = self
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        self.mocks.push(mock);

        Ok(self)
    }

    /// Check every mock registered through the helpers was hit as expected
    pub async fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}
