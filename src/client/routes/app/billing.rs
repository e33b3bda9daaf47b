use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    model::{
        auth::Role,
        billing::{PaymentDto, PaymentStatus},
    },
    service::AppApi,
    util::time::{format_datetime, format_optional},
};

use crate::client::{
    components::{ExportButtons, StatCard},
    hooks::{use_auth, use_revenue_report},
    util::use_error_handler,
};

fn status_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "badge-success",
        PaymentStatus::Pending => "badge-warning",
        PaymentStatus::Failed => "badge-error",
        PaymentStatus::Refunded => "badge-ghost",
    }
}

/// Subscription payments: every hotel for the platform admin, the own hotel otherwise
#[component]
pub fn Billing() -> Element {
    let api = use_context::<AppApi>();
    let auth = use_auth();
    let on_error = use_error_handler();
    let mut payments = use_signal(Vec::<PaymentDto>::new);
    let revenue = use_revenue_report(payments);

    let user = auth.user();
    let platform_wide = user.as_ref().is_some_and(|user| user.role == Role::SuperAdmin);
    let hotel_id = user.as_ref().and_then(|user| user.hotel_id);

    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let result = match (platform_wide, hotel_id) {
                (true, _) => api.get_payments().await,
                (false, Some(hotel_id)) => api.get_hotel_payments(hotel_id).await,
                (false, None) => return,
            };

            match result {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    payments.set(list);
                }
                Err(e) => on_error(e),
            }
        }
    });

    let revenue = revenue();

    rsx!(
        Title { "Billing | Hotelfix" }
        div { class: "flex flex-col gap-6",
            div { class: "flex justify-between items-center",
                h1 { class: "text-2xl", "Billing" }
                ExportButtons::<PaymentDto> { rows: payments(), file_prefix: "payments" }
            }
            div { class: "stats stats-vertical lg:stats-horizontal shadow w-full",
                StatCard { title: "Paid", value: format!("€{:.2}", revenue.total_paid) }
                StatCard { title: "Outstanding", value: format!("€{:.2}", revenue.outstanding) }
                for (status, count) in revenue.count_by_status.iter() {
                    StatCard { key: "{status}", title: *status, value: "{count}" }
                }
            }
            table { class: "table",
                thead {
                    tr {
                        if platform_wide {
                            th { "Hotel" }
                        }
                        th { "Plan" }
                        th { "Amount" }
                        th { "Status" }
                        th { "Created" }
                        th { "Paid" }
                    }
                }
                tbody {
                    for payment in payments() {
                        tr { key: "{payment.id}",
                            if platform_wide {
                                td { {payment.hotel_name.clone().unwrap_or_else(|| payment.hotel_id.to_string())} }
                            }
                            td { {payment.plan_name.clone().unwrap_or_default()} }
                            td { {format!("{:.2} {}", payment.amount, payment.currency)} }
                            td {
                                span { class: "badge {status_class(payment.status)}", "{payment.status}" }
                            }
                            td { {format_datetime(&payment.created_at)} }
                            td { {format_optional(payment.paid_at.as_ref())} }
                        }
                    }
                }
            }
        }
    )
}
