use dioxus::prelude::*;

use crate::client::store::toast::Toasts;

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_context::<Toasts>();

    rsx!(
        div { class: "toast toast-end z-50",
            for toast in toasts.items() {
                div {
                    key: "{toast.id}",
                    class: "alert {toast.kind.class()}",
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    )
}
