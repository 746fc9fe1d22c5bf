use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use biblia_core::model::AuthToken;
use biblia_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::history::{History, MemoryHistory, provide_history_context};
use dioxus::prelude::*;
use services::{AuthApi, Clock, PlanApi, SessionService};
use storage::repository::{InMemoryRepository, SessionRepository};

use crate::app::AppRoutes;
use crate::context::{UiApp, build_app_context};
use crate::vm::test_support::{FakeAuthApi, FakePlanApi};

struct TestApp {
    plan: Arc<FakePlanApi>,
    auth: Arc<FakeAuthApi>,
    sessions: Arc<SessionService>,
    catechism_enabled: bool,
}

impl UiApp for TestApp {
    fn plan_api(&self) -> Arc<dyn PlanApi> {
        self.plan.clone()
    }

    fn auth_api(&self) -> Arc<dyn AuthApi> {
        self.auth.clone()
    }

    fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn catechism_enabled(&self) -> bool {
        self.catechism_enabled
    }
}

type Updater = Arc<dyn Fn() + Send + Sync>;

/// In-memory history that keeps the router's updater so tests can navigate
/// the way a user would through the address bar.
#[derive(Default)]
struct TestHistory {
    inner: MemoryHistory,
    updater: RefCell<Option<Updater>>,
}

impl History for TestHistory {
    fn current_route(&self) -> String {
        self.inner.current_route()
    }

    fn can_go_back(&self) -> bool {
        self.inner.can_go_back()
    }

    fn go_back(&self) {
        self.inner.go_back();
    }

    fn can_go_forward(&self) -> bool {
        self.inner.can_go_forward()
    }

    fn go_forward(&self) {
        self.inner.go_forward();
    }

    fn push(&self, route: String) {
        self.inner.push(route);
    }

    fn replace(&self, path: String) {
        self.inner.replace(path);
    }

    fn updater(&self, callback: Updater) {
        *self.updater.borrow_mut() = Some(callback);
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    history: Rc<TestHistory>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let history: Rc<dyn History> = props.history.clone();
    use_hook(|| provide_history_context(history));
    use_context_provider(|| build_app_context(&app));
    rsx! { AppRoutes {} }
}

pub struct HarnessOptions {
    pub token: Option<AuthToken>,
    pub catechism_enabled: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            token: Some(crate::vm::test_support::token()),
            catechism_enabled: false,
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub plan: Arc<FakePlanApi>,
    pub auth: Arc<FakeAuthApi>,
    pub repo: InMemoryRepository,
    history: Rc<TestHistory>,
}

impl ViewHarness {
    /// Build the app with scripted APIs. Queue responses on `plan`/`auth`
    /// before the first `settle`.
    pub fn new(options: HarnessOptions) -> Self {
        let repo = match options.token {
            Some(token) => InMemoryRepository::with_token(token),
            None => InMemoryRepository::new(),
        };
        let plan = Arc::new(FakePlanApi::default());
        let auth = Arc::new(FakeAuthApi::default());
        let app = Arc::new(TestApp {
            plan: Arc::clone(&plan),
            auth: Arc::clone(&auth),
            sessions: Arc::new(SessionService::new(Arc::new(repo.clone()))),
            catechism_enabled: options.catechism_enabled,
        });
        let history = Rc::new(TestHistory::default());

        let dom = VirtualDom::new_with_props(
            HarnessRoot,
            HarnessProps {
                app,
                history: Rc::clone(&history),
            },
        );

        Self {
            dom,
            plan,
            auth,
            repo,
            history,
        }
    }

    /// First render, then run tasks and effects until the fakes have answered.
    pub async fn settle(&mut self) {
        self.dom.rebuild_in_place();
        self.pump().await;
    }

    /// Run pending tasks and effects without rebuilding.
    pub async fn pump(&mut self) {
        for _ in 0..8 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(20),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Push `path` onto the history and let the router react to it.
    pub async fn navigate(&mut self, path: &str) {
        self.history.push(path.to_string());
        let updater = self.history.updater.borrow().clone();
        if let Some(update) = updater {
            self.dom.in_runtime(|| update());
        }
        self.pump().await;
    }

    pub fn route(&self) -> String {
        self.history.current_route()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub async fn persisted_token(&self) -> Option<AuthToken> {
        self.repo.load_token().await.expect("load token")
    }
}
