use dioxus::prelude::*;

use crate::client::{
    components::{AppLayout, Navbar},
    routes::{
        app::{AuditLogs, Billing, Categories, Dashboard, Hotels, Plans, Privacy, Technicians, TicketDetail},
        Home, Login, NotFound, Register, ReportIssue, TrackSearch, TrackTicket,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/report/:hotel_id")]
    ReportIssue { hotel_id: i64 },

    #[route("/track")]
    TrackSearch {},

    #[route("/track/:ticket_number")]
    TrackTicket { ticket_number: String },

    #[end_layout]

    #[nest("/app")]

        #[layout(AppLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/tickets/:id")]
        TicketDetail { id: i64 },

        #[route("/technicians")]
        Technicians {},

        #[route("/categories")]
        Categories {},

        #[route("/billing")]
        Billing {},

        #[route("/privacy")]
        Privacy {},

        #[route("/hotels")]
        Hotels {},

        #[route("/plans")]
        Plans {},

        #[route("/audit")]
        AuditLogs {},

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
