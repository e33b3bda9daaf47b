//! Dioxus hooks wrapping the library's stateful helpers.

mod auth;
mod notifications;
mod pagination;
mod reports;

pub use auth::use_auth;
pub use notifications::use_notifications;
pub use pagination::use_pagination;
pub use reports::{use_reports, use_revenue_report};
