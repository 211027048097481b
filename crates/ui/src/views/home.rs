use dioxus::prelude::*;
use services::WELCOME_DELAY;

use crate::context::PageState;

#[component]
pub fn HomeView() -> Element {
    let page = use_context::<PageState>();
    let chat = page.chat;
    let mut chat_log = page.chat_log;
    let presence = page.presence;
    let mut draft = use_signal(String::new);

    use_future(move || async move {
        tokio::time::sleep(WELCOME_DELAY).await;
        let turn = chat.read().welcome_turn();
        chat_log.write().welcome(&turn);
    });

    let send = use_callback(move |()| {
        let text = draft.read().clone();
        if page.send_message(&text) {
            draft.set(String::new());
        }
    });

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Enter && !evt.data.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            send.call(());
        }
    };

    let messages = chat_log.read().messages().to_vec();
    let typing = chat_log.read().is_typing();
    let online = presence.read().count().label();

    rsx! {
        section { class: "page chat-page",
            div { class: "chat-header",
                div { class: "chat-title",
                    h2 { "Chat with Yuvaa" }
                    p { "Your AI wellness companion" }
                }
                span { class: "online-count", id: "onlineCount", "{online}" }
            }
            div { class: "chat-messages", id: "chatMessages",
                for message in messages {
                    div { key: "{message.key}", class: message.class(),
                        div { class: "message-avatar", "{message.avatar}" }
                        div { class: "message-content",
                            span { class: "message-username", "{message.username}" }
                            p { class: "message-text", "{message.text}" }
                        }
                    }
                }
                if typing {
                    div { class: "message yuvaa-message typing-indicator",
                        div { class: "message-avatar", "Y" }
                        div { class: "typing-dots",
                            span {}
                            span {}
                            span {}
                        }
                    }
                }
            }
            div { class: "chat-input",
                input {
                    id: "messageInput",
                    r#type: "text",
                    placeholder: "Share how you're feeling...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: on_keydown,
                }
                button { class: "send-btn", onclick: move |_| send.call(()), "Send" }
            }
        }
    }
}
