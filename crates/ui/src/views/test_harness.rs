use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::Clock;
use wellness_core::time::fixed_now;

use crate::context::{PageState, UiApp, build_app_context};
use crate::views::{ContactView, FaqView, GardenView, HomeView, HubView, ToastHost};

pub const TEST_SEED: u64 = 7;

struct TestApp;

impl UiApp for TestApp {
    fn rng_seed(&self) -> Option<u64> {
        Some(TEST_SEED)
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn reply_delay(&self) -> (Duration, Duration) {
        (Duration::ZERO, Duration::ZERO)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Hub,
    Garden,
    Faq,
    Contact,
}

/// Hands the harness the `PageState` created inside the dom.
#[derive(Clone, Default)]
pub struct PageHandle(Rc<RefCell<Option<PageState>>>);

impl PageHandle {
    fn register(&self, page: PageState) {
        *self.0.borrow_mut() = Some(page);
    }

    fn get(&self) -> PageState {
        (*self.0.borrow()).expect("page state registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    view: ViewKind,
    handle: PageHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp);
    let ctx = use_context_provider(|| build_app_context(&app));
    let page = use_context_provider(|| PageState::new(&ctx));
    use_hook(|| props.handle.register(page));
    use_context_provider(|| props.view);
    rsx! {
        Router::<TestRoute> {}
        ToastHost {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Hub => rsx! { HubView {} },
        ViewKind::Garden => rsx! { GardenView {} },
        ViewKind::Faq => rsx! { FaqView {} },
        ViewKind::Contact => rsx! { ContactView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handle: PageHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Mutate page state the way an event handler would, then re-render.
    pub fn act(&mut self, f: impl FnOnce(PageState)) {
        let page = self.handle.get();
        self.dom.in_scope(ScopeId::ROOT, || f(page));
        drive_dom(&mut self.dom);
    }

    /// Read page state without re-rendering.
    pub fn read<T>(&self, f: impl FnOnce(PageState) -> T) -> T {
        let page = self.handle.get();
        self.dom.in_scope(ScopeId::ROOT, || f(page))
    }

    /// Run spawned tasks and timers for `duration` of (paused) tokio time.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout_at(deadline, self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let handle = PageHandle::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            view,
            handle: handle.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handle };
    harness.rebuild();
    harness
}
