use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{model::audit::AuditLogDto, service::AppApi, util::time::format_datetime};

use crate::client::{
    components::{ExportButtons, PaginationBar},
    hooks::use_pagination,
    util::use_error_handler,
};

const AUDIT_PAGE_SIZE: usize = 25;

#[component]
pub fn AuditLogs() -> Element {
    let api = use_context::<AppApi>();
    let on_error = use_error_handler();
    let mut logs = use_signal(Vec::<AuditLogDto>::new);
    let mut search = use_signal(String::new);

    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.get_audit_logs().await {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    logs.set(list);
                }
                Err(e) => on_error(e),
            }
        }
    });

    let filtered = use_memo(move || {
        let needle = search.read().trim().to_lowercase();
        logs.read()
            .iter()
            .filter(|log| {
                needle.is_empty()
                    || log.action.to_lowercase().contains(&needle)
                    || log
                        .user_email
                        .as_deref()
                        .is_some_and(|email| email.to_lowercase().contains(&needle))
                    || log
                        .entity_type
                        .as_deref()
                        .is_some_and(|entity| entity.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect::<Vec<_>>()
    });
    let total = use_memo(move || filtered.read().len());
    let paginator = use_pagination(total, AUDIT_PAGE_SIZE);

    let rows = filtered();
    let page = paginator.read().page_slice(&rows).to_vec();

    rsx!(
        Title { "Audit log | Hotelfix" }
        div { class: "flex flex-col gap-4",
            div { class: "flex justify-between items-center",
                h1 { class: "text-2xl", "Audit log" }
                ExportButtons::<AuditLogDto> { rows: rows.clone(), file_prefix: "audit_log" }
            }
            input {
                class: "input input-sm w-80",
                placeholder: "Filter by action, user or entity",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }
            table { class: "table table-sm",
                thead {
                    tr {
                        th { "Time" }
                        th { "User" }
                        th { "Action" }
                        th { "Entity" }
                        th { "Details" }
                        th { "IP" }
                    }
                }
                tbody {
                    for log in page {
                        tr { key: "{log.id}",
                            td { {format_datetime(&log.created_at)} }
                            td { {log.user_email.clone().unwrap_or_else(|| "system".to_string())} }
                            td { span { class: "badge badge-outline", "{log.action}" } }
                            td {
                                {log.entity_type.clone().unwrap_or_default()}
                                if let Some(entity_id) = log.entity_id { " #{entity_id}" }
                            }
                            td { {log.details.clone().unwrap_or_default()} }
                            td { {log.ip_address.clone().unwrap_or_default()} }
                        }
                    }
                }
            }
            PaginationBar { paginator }
        }
    )
}
