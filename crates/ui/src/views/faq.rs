use dioxus::prelude::*;

use crate::vm::{FAQ_ENTRIES, FaqAccordion};

#[component]
pub fn FaqView() -> Element {
    let mut accordion = use_signal(FaqAccordion::default);
    let state = accordion();

    rsx! {
        section { class: "page faq-page",
            h2 { "Frequently Asked Questions" }
            div { class: "faq-list",
                for (index, entry) in FAQ_ENTRIES.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if state.is_open(index) { "faq-item active" } else { "faq-item" },
                        button {
                            class: "faq-question",
                            onclick: move |_| accordion.write().toggle(index),
                            span { "{entry.question}" }
                            i { class: if state.is_open(index) { "fas fa-minus" } else { "fas fa-plus" } }
                        }
                        if state.is_open(index) {
                            div { class: "faq-answer",
                                p { "{entry.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
