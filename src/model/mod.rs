//! DTOs mirrored from the ticketing backend's REST responses.
//!
//! Every type here is owned by the backend; the client only reads and forwards them.
//! Field names are camelCase on the wire.

pub mod api;
pub mod audit;
pub mod auth;
pub mod billing;
pub mod hotel;
pub mod privacy;
pub mod ticket;
pub mod user;
