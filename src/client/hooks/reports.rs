use chrono::Utc;
use dioxus::prelude::*;
use hotelfix::{
    model::{billing::PaymentDto, ticket::TicketDto},
    util::report::{RevenueReport, TicketReport},
};

pub fn use_reports(tickets: Signal<Vec<TicketDto>>) -> Memo<TicketReport> {
    use_memo(move || TicketReport::from_tickets(&tickets.read(), Utc::now().naive_utc()))
}

pub fn use_revenue_report(payments: Signal<Vec<PaymentDto>>) -> Memo<RevenueReport> {
    use_memo(move || RevenueReport::from_payments(&payments.read()))
}
