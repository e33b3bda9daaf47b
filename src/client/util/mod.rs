mod download;
mod error;
mod files;
mod sleep;

pub use download::download;
pub use error::use_error_handler;
pub use files::read_images;
pub use sleep::sleep;
