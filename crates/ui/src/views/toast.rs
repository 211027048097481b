use dioxus::prelude::*;

use crate::context::PageState;

/// Stack of transient notifications; each removes itself after its TTL.
#[component]
pub fn ToastHost() -> Element {
    let page = use_context::<PageState>();
    let toasts = page.toasts.read().items().to_vec();

    rsx! {
        div { class: "notification-stack", "aria-live": "polite",
            for toast in toasts {
                div { key: "{toast.id}", class: "notification", "{toast.message}" }
            }
        }
    }
}
