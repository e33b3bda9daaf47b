use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("There is no data to export")]
    NoData,
    #[error("Failed to build spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("Failed to start download: {0}")]
    Download(String),
}
