pub mod auth;
pub mod billing;
pub mod ticket;

/// JSON factories for backend responses
pub mod factory {
    pub use super::auth::auth_response;
    pub use super::billing::payment;
    pub use super::ticket::{comment, ticket, urgent_unassigned_ticket};
}
