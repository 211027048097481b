use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::views::{ContactView, FaqView, GardenView, HomeView, HubView, ToastHost};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/hub", HubView)] Hub {},
        #[route("/garden", GardenView)] Garden {},
        #[route("/faq", FaqView)] Faq {},
        #[route("/contact", ContactView)] Contact {},
}

#[component]
fn Layout() -> Element {
    let navigator = use_navigator();

    // Ctrl/Cmd + K jumps to the chat input.
    let on_keydown = move |evt: KeyboardEvent| {
        let modifiers = evt.data.modifiers();
        if !modifiers.contains(Modifiers::CONTROL) && !modifiers.contains(Modifiers::META) {
            return;
        }
        if !matches!(evt.data.key(), Key::Character(value) if value.eq_ignore_ascii_case("k")) {
            return;
        }
        evt.prevent_default();
        navigator.push(Route::Home {});
        let _ = eval("setTimeout(() => document.getElementById('messageInput')?.focus(), 0);");
    };

    rsx! {
        div { class: "app", tabindex: "-1", onkeydown: on_keydown,
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "NeuraMate" }
            ul {
                li { Link { to: Route::Home {}, "Chat" } }
                li { Link { to: Route::Hub {}, "Wellness Hub" } }
                li { Link { to: Route::Garden {}, "Garden" } }
                li { Link { to: Route::Faq {}, "FAQ" } }
                li { Link { to: Route::Contact {}, "Contact" } }
            }
        }
    }
}
