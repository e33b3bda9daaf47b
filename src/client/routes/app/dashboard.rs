use chrono::Utc;
use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    config::ClientConfig,
    model::{
        auth::Role,
        billing::PaymentDto,
        hotel::HotelDto,
        ticket::{TicketDto, TicketPriority, TicketStatus},
    },
    service::AppApi,
    util::{filter::TicketFilter, report::TicketReport},
};

use crate::client::{
    components::{DailyChart, ExportButtons, StatCard, TicketTable},
    hooks::{use_auth, use_reports, use_revenue_report},
    router::Route,
    util::use_error_handler,
};

const CHART_DAYS: u32 = 14;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    let Some(user) = auth.user() else {
        return rsx!();
    };

    rsx!(
        Title { "Dashboard | Hotelfix" }
        match user.role {
            Role::Admin => rsx! { HotelDashboard { hotel_id: user.hotel_id } },
            Role::Technician => rsx! { TechnicianDashboard { user_id: user.user_id } },
            Role::SuperAdmin => rsx! { PlatformDashboard {} },
            Role::Client => rsx! { ClientDashboard { hotel_id: user.hotel_id } },
        }
    )
}

#[component]
fn HotelDashboard(hotel_id: Option<i64>) -> Element {
    let api = use_context::<AppApi>();
    let on_error = use_error_handler();
    let mut tickets = use_signal(Vec::<TicketDto>::new);

    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(hotel_id) = hotel_id else {
                return;
            };
            match api.get_hotel_tickets(hotel_id).await {
                Ok(list) => tickets.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let report_link = hotel_id.map(|hotel_id| Route::ReportIssue { hotel_id });

    rsx!(
        div { class: "flex flex-col gap-6",
            div { class: "flex justify-between items-center",
                h1 { class: "text-2xl", "Hotel tickets" }
                if let Some(link) = report_link {
                    Link { class: "btn btn-outline btn-sm", to: link, "Guest report form" }
                }
            }
            TicketOverview { tickets, export_prefix: "hotel_tickets" }
        }
    )
}

#[component]
fn TechnicianDashboard(user_id: i64) -> Element {
    let api = use_context::<AppApi>();
    let on_error = use_error_handler();
    let mut tickets = use_signal(Vec::<TicketDto>::new);

    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.get_technician_tickets(user_id).await {
                Ok(list) => tickets.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    rsx!(
        div { class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "My tickets" }
            TicketOverview { tickets, export_prefix: "my_tickets" }
        }
    )
}

/// Stats, daily chart, filters and the ticket table over one ticket list
#[component]
fn TicketOverview(tickets: Signal<Vec<TicketDto>>, #[props(into)] export_prefix: String) -> Element {
    let config = use_context::<ClientConfig>();
    let report = use_reports(tickets);
    let mut filter = use_signal(TicketFilter::default);
    let filtered = use_memo(move || filter.read().apply(&tickets.read()));

    rsx!(
        ReportCards { report: report() }
        DailyChart {
            title: "Tickets reported per day",
            series: report().daily_series(Utc::now().date_naive(), CHART_DAYS),
        }
        div { class: "flex flex-wrap items-center gap-2",
            input {
                class: "input input-sm",
                placeholder: "Search number, title, room",
                value: "{filter.read().search}",
                oninput: move |evt| filter.write().search = evt.value(),
            }
            select {
                class: "select select-sm",
                onchange: move |evt| filter.write().status = TicketStatus::parse(&evt.value()),
                option { value: "", "All statuses" }
                for status in TicketStatus::ALL {
                    option { value: "{status.as_str()}", "{status}" }
                }
            }
            select {
                class: "select select-sm",
                onchange: move |evt| filter.write().priority = TicketPriority::parse(&evt.value()),
                option { value: "", "All priorities" }
                for priority in TicketPriority::ALL {
                    option { value: "{priority.as_str()}", "{priority}" }
                }
            }
            label { class: "label text-sm",
                input {
                    class: "checkbox checkbox-sm",
                    r#type: "checkbox",
                    checked: filter.read().unassigned_only,
                    onchange: move |evt| filter.write().unassigned_only = evt.checked(),
                }
                "Unassigned only"
            }
            div { class: "flex-1" }
            ExportButtons::<TicketDto> { rows: filtered(), file_prefix: export_prefix }
        }
        TicketTable { tickets: filtered, page_size: config.default_page_size }
    )
}

#[component]
fn ReportCards(report: TicketReport) -> Element {
    let compliance = report
        .sla_compliance_rate
        .map(|rate| format!("{:.0}%", rate * 100.0))
        .unwrap_or_else(|| "n/a".to_string());
    let resolution = report
        .average_resolution_hours
        .map(|hours| format!("{:.1} h", hours))
        .unwrap_or_else(|| "n/a".to_string());

    rsx!(
        div { class: "stats stats-vertical lg:stats-horizontal shadow w-full",
            StatCard { title: "Total", value: "{report.total}" }
            StatCard {
                title: "Active",
                value: "{report.active}",
                description: format!("{} unassigned", report.unassigned_active),
            }
            StatCard {
                title: "Open",
                value: "{report.count_for(TicketStatus::Open)}",
            }
            StatCard {
                title: "SLA breached",
                value: "{report.sla_breached}",
            }
            StatCard { title: "SLA compliance", value: compliance }
            StatCard { title: "Avg. resolution", value: resolution }
        }
        div { class: "flex flex-wrap gap-2",
            for (category, count) in report.by_category.iter() {
                span { key: "{category}", class: "badge badge-outline", "{category}: {count}" }
            }
        }
    )
}

#[component]
fn PlatformDashboard() -> Element {
    let api = use_context::<AppApi>();
    let on_error = use_error_handler();
    let mut hotels = use_signal(Vec::<HotelDto>::new);
    let mut payments = use_signal(Vec::<PaymentDto>::new);
    let revenue = use_revenue_report(payments);

    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.get_hotels().await {
                Ok(list) => hotels.set(list),
                Err(e) => return on_error(e),
            }
            match api.get_payments().await {
                Ok(list) => payments.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let active_hotels = hotels.read().iter().filter(|hotel| hotel.active).count();
    let revenue = revenue();

    rsx!(
        div { class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Platform overview" }
            div { class: "stats stats-vertical lg:stats-horizontal shadow w-full",
                StatCard {
                    title: "Hotels",
                    value: "{hotels.read().len()}",
                    description: format!("{} active", active_hotels),
                }
                StatCard { title: "Revenue", value: format!("€{:.2}", revenue.total_paid) }
                StatCard { title: "Outstanding", value: format!("€{:.2}", revenue.outstanding) }
            }
            div { class: "bg-base-200 rounded-box p-4",
                h3 { class: "font-semibold mb-2", "Revenue per month" }
                if revenue.paid_per_month.is_empty() {
                    p { class: "opacity-70", "No payments yet." }
                }
                for ((year, month), amount) in revenue.paid_per_month.iter().rev() {
                    p { key: "{year}-{month}", class: "text-sm",
                        {format!("{}-{:02}: €{:.2}", year, month, amount)}
                    }
                }
            }
            div { class: "flex justify-between items-center",
                h2 { class: "text-xl", "Hotels" }
                ExportButtons::<HotelDto> { rows: hotels(), file_prefix: "hotels" }
            }
            Link { class: "link", to: Route::Hotels {}, "Manage hotels" }
        }
    )
}

#[component]
fn ClientDashboard(hotel_id: Option<i64>) -> Element {
    rsx!(
        div { class: "flex flex-col gap-4 max-w-xl",
            h1 { class: "text-2xl", "Welcome" }
            p { "Report a problem during your stay or follow up on one you already reported." }
            div { class: "flex gap-2",
                if let Some(hotel_id) = hotel_id {
                    Link { class: "btn btn-primary", to: Route::ReportIssue { hotel_id }, "Report an issue" }
                }
                Link { class: "btn btn-outline", to: Route::TrackSearch {}, "Track a ticket" }
                Link { class: "btn btn-ghost", to: Route::Privacy {}, "Privacy settings" }
            }
        }
    )
}
