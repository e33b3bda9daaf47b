//! Hotelfix: maintenance ticketing for hotels.
//!
//! The library holds everything the Dioxus client builds on that doesn't touch the DOM:
//! backend DTOs, the REST service layer, session persistence and the pagination,
//! notification, reporting and export helpers. The UI itself lives in the binary.

pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod util;
