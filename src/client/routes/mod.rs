pub mod app;

mod auth;
mod home;
mod not_found;
mod report;
mod track;

pub use auth::{Login, Register};
pub use home::Home;
pub use not_found::NotFound;
pub use report::ReportIssue;
pub use track::{TrackSearch, TrackTicket};
