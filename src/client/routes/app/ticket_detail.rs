use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use hotelfix::{
    model::{
        auth::Role,
        ticket::{CommentDto, CreateCommentRequest, TicketDto, TicketStatus},
        user::TechnicianDto,
    },
    service::AppApi,
    util::time::{format_datetime, format_optional},
};

use crate::client::{
    components::{PriorityBadge, SlaBadge, StatusBadge, StatusSelect},
    hooks::use_auth,
    router::Route,
    store::toast::Toasts,
    util::{read_images, use_error_handler},
};

#[component]
pub fn TicketDetail(id: i64) -> Element {
    let api = use_context::<AppApi>();
    let on_error = use_error_handler();
    let mut ticket = use_signal(|| None::<TicketDto>);

    let _ = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        async move {
            match api.get_ticket(id).await {
                Ok(loaded) => ticket.set(Some(loaded)),
                Err(e) => on_error(e),
            }
        }
    }));

    let Some(current) = ticket() else {
        return rsx!(div { class: "skeleton h-64 w-full" });
    };

    rsx!(
        Title { "{current.ticket_number} | Hotelfix" }
        div { class: "flex flex-col gap-6 max-w-4xl",
            Link { class: "link text-sm", to: Route::Dashboard {}, "← Back to tickets" }
            div { class: "card bg-base-200",
                div { class: "card-body gap-2",
                    p { class: "font-mono opacity-70", "{current.ticket_number}" }
                    h1 { class: "card-title text-2xl", "{current.title}" }
                    div { class: "flex flex-wrap gap-2",
                        StatusBadge { status: current.status }
                        PriorityBadge { priority: current.priority }
                        SlaBadge { ticket: current.clone() }
                    }
                    p { class: "whitespace-pre-line", "{current.description}" }
                    div { class: "grid grid-cols-2 gap-1 text-sm",
                        span { "Room" }
                        span { {current.room_number.clone().unwrap_or_else(|| "-".to_string())} }
                        span { "Category" }
                        span { {current.category_name.clone().unwrap_or_else(|| "-".to_string())} }
                        span { "Reported by" }
                        span {
                            {current.reporter_name.clone().unwrap_or_default()}
                            " "
                            {current.reporter_email.clone().map(|email| format!("<{}>", email)).unwrap_or_default()}
                        }
                        span { "Created" }
                        span { {format_datetime(&current.created_at)} }
                        span { "SLA deadline" }
                        span { {format_optional(current.sla_deadline.as_ref())} }
                        span { "Resolved" }
                        span { {format_optional(current.resolved_at.as_ref())} }
                    }
                }
            }
            StatusPanel { ticket }
            AssignPanel { ticket }
            ImagesPanel { ticket }
            CommentsPanel { ticket_id: id }
        }
    )
}

#[component]
fn StatusPanel(ticket: Signal<Option<TicketDto>>) -> Element {
    let api = use_context::<AppApi>();
    let auth = use_auth();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut busy = use_signal(|| false);

    let user_id = auth.user().map(|user| user.user_id).unwrap_or_default();

    let change_status = use_callback(move |next: TicketStatus| {
        let api = api.clone();
        let Some(current) = ticket() else {
            return;
        };

        spawn(async move {
            busy.set(true);
            match api.transition_ticket(&current, next, user_id).await {
                Ok(updated) => {
                    toasts.success(format!("{} is now {}", updated.ticket_number, updated.status));
                    ticket.set(Some(updated));
                }
                Err(e) => on_error(e),
            }
            busy.set(false);
        });
    });

    let Some(current) = ticket() else {
        return rsx!();
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Status" }
                StatusSelect {
                    current: current.status,
                    disabled: busy(),
                    onselect: move |next| change_status.call(next),
                }
            }
        }
    )
}

#[component]
fn AssignPanel(ticket: Signal<Option<TicketDto>>) -> Element {
    let api = use_context::<AppApi>();
    let auth = use_auth();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut technicians = use_signal(Vec::<TechnicianDto>::new);

    let user = auth.user();
    let user_id = user.as_ref().map(|user| user.user_id).unwrap_or_default();
    let is_admin = user.as_ref().is_some_and(|user| user.role == Role::Admin);
    let hotel_id = ticket.peek().as_ref().map(|ticket| ticket.hotel_id);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            let Some(hotel_id) = hotel_id.filter(|_| is_admin) else {
                return;
            };
            match api.get_hotel_technicians(hotel_id).await {
                Ok(list) => technicians.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let assign = use_callback(move |technician_id: i64| {
        let api = api.clone();
        let Some(ticket_id) = ticket.peek().as_ref().map(|ticket| ticket.id) else {
            return;
        };

        spawn(async move {
            match api.assign_ticket(ticket_id, technician_id, user_id).await {
                Ok(updated) => {
                    let name = updated.assigned_to_name.clone().unwrap_or_default();
                    toasts.success(format!("Assigned to {}", name));
                    ticket.set(Some(updated));
                }
                Err(e) => on_error(e),
            }
        });
    });

    let Some(current) = ticket() else {
        return rsx!();
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Technician" }
                p {
                    {current.assigned_to_name.clone().unwrap_or_else(|| "Nobody is working on this yet.".to_string())}
                }
                if is_admin && current.status.is_active() {
                    select {
                        class: "select select-sm w-64",
                        onchange: move |evt| {
                            if let Ok(technician_id) = evt.value().parse::<i64>() {
                                assign.call(technician_id);
                            }
                        },
                        option { value: "", "Assign to…" }
                        for technician in technicians() {
                            option {
                                key: "{technician.id}",
                                value: "{technician.id}",
                                selected: current.assigned_to_id == Some(technician.id),
                                {format!("{} ({} active)", technician.full_name, technician.active_tickets)}
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ImagesPanel(ticket: Signal<Option<TicketDto>>) -> Element {
    let api = use_context::<AppApi>();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut uploading = use_signal(|| false);

    let upload_api = api.clone();
    let upload = move |evt: FormEvent| {
        let api = upload_api.clone();
        let Some(ticket_id) = ticket.peek().as_ref().map(|ticket| ticket.id) else {
            return;
        };

        spawn(async move {
            let images = read_images(evt).await;
            if images.is_empty() {
                return;
            }

            uploading.set(true);
            match api.upload_ticket_images(ticket_id, &images).await {
                Ok(updated) => {
                    toasts.success(format!("{} photo(s) added", images.len()));
                    ticket.set(Some(updated));
                }
                Err(e) => on_error(e),
            }
            uploading.set(false);
        });
    };

    let delete_image = use_callback(move |image_id: i64| {
        let api = api.clone();
        let Some(ticket_id) = ticket.peek().as_ref().map(|ticket| ticket.id) else {
            return;
        };

        spawn(async move {
            match api.delete_ticket_image(ticket_id, image_id).await {
                Ok(()) => {
                    tracing::debug!(ticket_id = ticket_id, image_id = image_id, "Image removed");
                    if let Some(ticket) = ticket.write().as_mut() {
                        ticket.images.retain(|image| image.id != image_id);
                    }
                }
                Err(e) => on_error(e),
            }
        });
    });

    let images = ticket
        .read()
        .as_ref()
        .map(|ticket| ticket.images.clone())
        .unwrap_or_default();

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Photos" }
                div { class: "flex flex-wrap gap-2",
                    for image in images {
                        div { key: "{image.id}", class: "relative",
                            a { href: "{image.url}", target: "_blank",
                                img { class: "w-32 h-32 object-cover rounded", src: "{image.url}" }
                            }
                            button {
                                class: "btn btn-xs btn-error absolute top-1 right-1",
                                onclick: move |_| delete_image.call(image.id),
                                "✕"
                            }
                        }
                    }
                }
                input {
                    class: "file-input file-input-sm w-full max-w-xs",
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    disabled: uploading(),
                    onchange: upload,
                }
            }
        }
    )
}

#[component]
fn CommentsPanel(ticket_id: i64) -> Element {
    let api = use_context::<AppApi>();
    let auth = use_auth();
    let on_error = use_error_handler();
    let mut comments = use_signal(Vec::<CommentDto>::new);
    let mut content = use_signal(String::new);
    let mut internal = use_signal(|| false);

    let user = auth.user();
    let author_id = user.as_ref().map(|user| user.user_id);
    let can_post_internal = user.as_ref().is_some_and(|user| user.role.can_work_tickets());

    let list_api = api.clone();
    let _ = use_resource(use_reactive!(|(ticket_id,)| {
        let api = list_api.clone();
        async move {
            match api.get_ticket_comments(ticket_id).await {
                Ok(list) => comments.set(list),
                Err(e) => on_error(e),
            }
        }
    }));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let text = content().trim().to_string();
        if text.is_empty() {
            return;
        }

        let request = CreateCommentRequest {
            content: text,
            author_id,
            internal: internal(),
        };

        spawn(async move {
            match api.add_ticket_comment(ticket_id, &request).await {
                Ok(comment) => {
                    comments.write().push(comment);
                    content.set(String::new());
                }
                Err(e) => on_error(e),
            }
        });
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title text-lg", "Comments" }
                if comments.read().is_empty() {
                    p { class: "opacity-70 text-sm", "No comments yet." }
                }
                for comment in comments() {
                    div { key: "{comment.id}", class: if comment.internal { "chat chat-end" } else { "chat chat-start" },
                        div { class: "chat-header text-xs",
                            {comment.author_name.clone().unwrap_or_else(|| "Guest".to_string())}
                            " · "
                            {format_datetime(&comment.created_at)}
                            if comment.internal { " · internal" }
                        }
                        div { class: "chat-bubble", "{comment.content}" }
                    }
                }
                form { class: "flex flex-col gap-2", onsubmit,
                    textarea {
                        class: "textarea w-full",
                        placeholder: "Write a comment",
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }
                    div { class: "flex justify-between items-center",
                        if can_post_internal {
                            label { class: "label text-sm",
                                input {
                                    class: "checkbox checkbox-sm",
                                    r#type: "checkbox",
                                    checked: internal(),
                                    onchange: move |evt| internal.set(evt.checked()),
                                }
                                "Internal note"
                            }
                        }
                        button { class: "btn btn-primary btn-sm", r#type: "submit", "Post" }
                    }
                }
            }
        }
    )
}
