use dioxus::prelude::*;
use hotelfix::{
    config::ClientConfig,
    util::pagination::{page_size_options, Paginator},
};

#[component]
pub fn PaginationBar(paginator: Signal<Paginator>) -> Element {
    let config = use_context::<ClientConfig>();
    let state = paginator.read().clone();
    let sizes = page_size_options(&[config.default_page_size, state.items_per_page()]);
    let total = state.total_items();
    let showing_from = if total == 0 { 0 } else { state.start_index() + 1 };
    let showing_to = state.end_index();

    rsx!(
        div { class: "flex items-center justify-between gap-4 py-2",
            p { class: "text-sm opacity-70",
                "Showing {showing_from}-{showing_to} of {total}"
            }
            div { class: "join",
                button {
                    class: "join-item btn btn-sm",
                    disabled: !state.has_previous_page(),
                    onclick: move |_| paginator.write().previous_page(),
                    "«"
                }
                for (index, page) in state.page_numbers(2).into_iter().enumerate() {
                    if let Some(page) = page {
                        button {
                            key: "page-{page}",
                            class: if page == state.current_page() { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                            onclick: move |_| paginator.write().go_to_page(page),
                            "{page}"
                        }
                    } else {
                        button {
                            key: "gap-{index}",
                            class: "join-item btn btn-sm btn-disabled",
                            "…"
                        }
                    }
                }
                button {
                    class: "join-item btn btn-sm",
                    disabled: !state.has_next_page(),
                    onclick: move |_| paginator.write().next_page(),
                    "»"
                }
            }
            select {
                class: "select select-sm",
                value: "{state.items_per_page()}",
                onchange: move |evt| {
                    if let Ok(size) = evt.value().parse::<usize>() {
                        paginator.write().set_items_per_page(size);
                    }
                },
                for size in sizes {
                    option { value: "{size}", "{size} per page" }
                }
            }
        }
    )
}
