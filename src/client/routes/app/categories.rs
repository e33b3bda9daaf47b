use dioxus::document::Title;
use dioxus::prelude::*;
use hotelfix::{
    model::hotel::{CategoryDto, CategoryRequest},
    service::AppApi,
};

use crate::client::{store::toast::Toasts, util::use_error_handler};

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn Categories() -> Element {
    let api = use_context::<AppApi>();
    let toasts = use_context::<Toasts>();
    let on_error = use_error_handler();
    let mut categories = use_signal(Vec::<CategoryDto>::new);
    let mut editing = use_signal(|| None::<i64>);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut icon = use_signal(String::new);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.get_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => on_error(e),
            }
        }
    });

    let edit = use_callback(move |category: CategoryDto| {
        editing.set(Some(category.id));
        name.set(category.name);
        description.set(category.description.unwrap_or_default());
        icon.set(category.icon.unwrap_or_default());
    });

    let mut reset = move || {
        editing.set(None);
        for mut field in [name, description, icon] {
            field.set(String::new());
        }
    };

    let remove_api = api.clone();
    let remove = use_callback(move |category_id: i64| {
        let api = remove_api.clone();
        spawn(async move {
            match api.delete_category(category_id).await {
                Ok(()) => categories.write().retain(|c| c.id != category_id),
                Err(e) => on_error(e),
            }
        });
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let request = CategoryRequest {
            name: name().trim().to_string(),
            description: non_empty(description()),
            icon: non_empty(icon()),
        };
        let target = editing();

        spawn(async move {
            let result = match target {
                Some(category_id) => api.update_category(category_id, &request).await,
                None => api.create_category(&request).await,
            };

            match result {
                Ok(saved) => {
                    let mut list = categories.write();
                    match list.iter_mut().find(|c| c.id == saved.id) {
                        Some(existing) => *existing = saved.clone(),
                        None => list.push(saved.clone()),
                    }
                    toasts.success(format!("Category {} saved", saved.name));
                    reset();
                }
                Err(e) => on_error(e),
            }
        });
    };

    rsx!(
        Title { "Categories | Hotelfix" }
        div { class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Ticket categories" }
            table { class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Description" }
                        th { "Icon" }
                        th {}
                    }
                }
                tbody {
                    for category in categories() {
                        tr { key: "{category.id}",
                            td { "{category.name}" }
                            td { {category.description.clone().unwrap_or_default()} }
                            td { {category.icon.clone().unwrap_or_default()} }
                            td { class: "flex gap-1",
                                button {
                                    class: "btn btn-ghost btn-xs",
                                    onclick: {
                                        let category = category.clone();
                                        move |_| edit.call(category.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-ghost btn-xs text-error",
                                    onclick: move |_| remove.call(category.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
            form { class: "card bg-base-200 max-w-xl", onsubmit,
                div { class: "card-body gap-2",
                    h2 { class: "card-title text-lg",
                        if editing().is_some() { "Edit category" } else { "New category" }
                    }
                    input { class: "input w-full", placeholder: "Name", required: true,
                        value: "{name}", oninput: move |evt| name.set(evt.value()) }
                    input { class: "input w-full", placeholder: "Description",
                        value: "{description}", oninput: move |evt| description.set(evt.value()) }
                    input { class: "input w-full", placeholder: "Icon",
                        value: "{icon}", oninput: move |evt| icon.set(evt.value()) }
                    div { class: "flex gap-2",
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                        if editing().is_some() {
                            button { class: "btn btn-ghost", r#type: "button", onclick: move |_| reset(), "Cancel" }
                        }
                    }
                }
            }
        }
    )
}
