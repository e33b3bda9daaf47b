use chrono::Utc;
use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    model::privacy::{
        ConsentDto, ConsentRequest, ConsentType, DeletionRequestDto, DeletionRequestRequest,
        DeletionRequestStatus, ProcessDeletionRequest,
    },
    service::AppApi,
    util::{
        export::export_filename,
        time::{format_datetime, format_optional},
    },
};

use crate::client::{
    hooks::use_auth,
    store::toast::Toasts,
    util::{download, use_error_handler},
};

/// Consents, personal data export and the right to erasure
#[component]
pub fn Privacy() -> Element {
    let auth = use_auth();
    let user = auth.user();
    let can_process = user.as_ref().is_some_and(|user| user.role.can_manage_hotel());

    let Some(user) = user else {
        return rsx!();
    };

    rsx!(
        Title { "Privacy | Hotelfix" }
        div { class: "flex flex-col gap-6 max-w-4xl",
            h1 { class: "text-2xl", "Privacy" }
            Consents { user_id: user.user_id }
            DataExport { user_id: user.user_id }
            DeletionRequestForm { user_id: user.user_id }
            if can_process {
                DeletionRequests {}
            }
        }
    )
}

#[component]
fn Consents(user_id: i64) -> Element {
    let api = use_context::<AppApi>();
    let on_error = use_error_handler();
    let mut consents = use_signal(Vec::<ConsentDto>::new);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.get_consents(user_id).await {
                Ok(list) => consents.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let toggle = use_callback(move |(consent_type, granted): (ConsentType, bool)| {
        let api = api.clone();
        spawn(async move {
            let request = ConsentRequest {
                user_id,
                consent_type,
                granted,
            };

            match api.update_consent(&request).await {
                Ok(saved) => {
                    let mut list = consents.write();
                    match list.iter_mut().find(|c| c.consent_type == saved.consent_type) {
                        Some(existing) => *existing = saved,
                        None => list.push(saved),
                    }
                }
                Err(e) => on_error(e),
            }
        });
    });

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Consents" }
                for consent_type in ConsentType::ALL {
                    label { key: "{consent_type.label()}", class: "label justify-between",
                        span { "{consent_type.label()}" }
                        input {
                            class: "toggle",
                            r#type: "checkbox",
                            checked: consents
                                .read()
                                .iter()
                                .any(|c| c.consent_type == consent_type && c.granted),
                            onchange: move |evt| toggle.call((consent_type, evt.checked())),
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn DataExport(user_id: i64) -> Element {
    let api = use_context::<AppApi>();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut exporting = use_signal(|| false);

    let export = move |_| {
        let api = api.clone();
        spawn(async move {
            exporting.set(true);
            match api.export_user_data(user_id).await {
                Ok(json) => {
                    let file_name = export_filename("my_data", "json", Utc::now().naive_utc());
                    match download(&file_name, "application/json", json.as_bytes()) {
                        Ok(()) => toasts.success(format!("Exported {}", file_name)),
                        Err(e) => on_error(e.into()),
                    }
                }
                Err(e) => on_error(e),
            }
            exporting.set(false);
        });
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Your data" }
                p { class: "text-sm", "Download everything we store about your account as JSON." }
                button { class: "btn btn-outline btn-sm w-48", disabled: exporting(), onclick: export,
                    "Download my data"
                }
            }
        }
    )
}

#[component]
fn DeletionRequestForm(user_id: i64) -> Element {
    let api = use_context::<AppApi>();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut reason = use_signal(String::new);
    let mut submitted = use_signal(|| None::<DeletionRequestDto>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let text = reason().trim().to_string();
        let request = DeletionRequestRequest {
            user_id,
            reason: (!text.is_empty()).then_some(text),
        };

        spawn(async move {
            match api.request_deletion(&request).await {
                Ok(created) => {
                    toasts.info("Your deletion request was sent to an administrator");
                    submitted.set(Some(created));
                }
                Err(e) => on_error(e),
            }
        });
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Delete my account" }
                if let Some(request) = submitted() {
                    p { class: "text-sm",
                        "Request sent on "
                        {format_datetime(&request.requested_at)}
                        ", status: {request.status.label()}"
                    }
                } else {
                    form { class: "flex flex-col gap-2", onsubmit,
                        textarea {
                            class: "textarea w-full",
                            placeholder: "Reason (optional)",
                            value: "{reason}",
                            oninput: move |evt| reason.set(evt.value()),
                        }
                        button { class: "btn btn-error btn-sm w-48", r#type: "submit", "Request deletion" }
                    }
                }
            }
        }
    )
}

#[component]
fn DeletionRequests() -> Element {
    let api = use_context::<AppApi>();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut requests = use_signal(Vec::<DeletionRequestDto>::new);
    let mut notes = use_signal(String::new);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.get_deletion_requests().await {
                Ok(list) => requests.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let process = use_callback(move |(request_id, approve): (i64, bool)| {
        let api = api.clone();
        let text = notes().trim().to_string();
        let request = ProcessDeletionRequest {
            approve,
            admin_notes: (!text.is_empty()).then_some(text),
        };

        spawn(async move {
            match api.process_deletion_request(request_id, &request).await {
                Ok(processed) => {
                    toasts.success(format!("Request {}", processed.status.label().to_lowercase()));
                    if let Some(existing) = requests.write().iter_mut().find(|r| r.id == processed.id) {
                        *existing = processed;
                    }
                    notes.set(String::new());
                }
                Err(e) => on_error(e),
            }
        });
    });

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Deletion requests" }
                input {
                    class: "input input-sm w-full",
                    placeholder: "Notes for the next decision",
                    value: "{notes}",
                    oninput: move |evt| notes.set(evt.value()),
                }
                table { class: "table table-sm",
                    thead {
                        tr {
                            th { "User" }
                            th { "Reason" }
                            th { "Requested" }
                            th { "Status" }
                            th { "Processed" }
                            th {}
                        }
                    }
                    tbody {
                        for request in requests() {
                            tr { key: "{request.id}",
                                td { {request.user_email.clone().unwrap_or_else(|| request.user_id.to_string())} }
                                td { {request.reason.clone().unwrap_or_default()} }
                                td { {format_datetime(&request.requested_at)} }
                                td { "{request.status.label()}" }
                                td { {format_optional(request.processed_at.as_ref())} }
                                td { class: "flex gap-1",
                                    if request.status == DeletionRequestStatus::Pending {
                                        button {
                                            class: "btn btn-xs btn-error",
                                            onclick: move |_| process.call((request.id, true)),
                                            "Approve"
                                        }
                                        button {
                                            class: "btn btn-xs btn-ghost",
                                            onclick: move |_| process.call((request.id, false)),
                                            "Reject"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
