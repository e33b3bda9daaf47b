use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("Unexpected fixture: {0}")]
    Fixture(String),
}
