use dioxus::prelude::*;
use services::Notification;
use wellness_core::model::ContactDraft;

use crate::context::PageState;

#[component]
pub fn ContactView() -> Element {
    let page = use_context::<PageState>();
    let mut contact = page.contact;
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ContactDraft {
            name: name(),
            email: email(),
            message: message(),
        };
        let result = contact.write().submit(draft);
        match result {
            Ok(notification) => {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                page.notify(&notification);
            }
            Err(err) => page.notify(&Notification::new(err.user_message())),
        }
    };

    rsx! {
        section { class: "page contact-page",
            h2 { "Get in Touch" }
            p { "Questions about NeuraMate? Send us a message." }
            form { class: "contact-form", id: "contactForm", onsubmit: submit,
                input {
                    r#type: "text",
                    name: "name",
                    placeholder: "Your name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "Your email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                textarea {
                    name: "message",
                    placeholder: "Your message",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                button { class: "primary-btn", r#type: "submit", "Send Message" }
            }
        }
    }
}
