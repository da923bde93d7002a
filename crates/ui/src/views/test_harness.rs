use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;
use dioxus_router::Router;
use pgr_core::time::fixed_clock;
use services::{
    AppServices, Clock, ExportService, ExportSettings, InMemorySink, SessionStore,
    StaticAuthenticator,
};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::dashboard::DashboardTestHandles;
use crate::views::login::LoginTestHandles;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn session_store(&self) -> Arc<SessionStore> {
        self.services.session_store()
    }

    fn export_service(&self) -> Arc<ExportService> {
        self.services.export()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Dashboard,
}

impl ViewKind {
    fn route(self) -> Route {
        match self {
            ViewKind::Login => Route::Login {},
            ViewKind::Dashboard => Route::Dashboard {},
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    history: Rc<dyn History>,
    login_handles: LoginTestHandles,
    dashboard_handles: DashboardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.history.clone());
    use_context_provider(|| props.login_handles.clone());
    use_context_provider(|| props.dashboard_handles.clone());
    rsx! { Router::<Route> {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session_store: Arc<SessionStore>,
    pub sink: Arc<InMemorySink>,
    pub history: Rc<dyn History>,
    pub login_handles: LoginTestHandles,
    pub dashboard_handles: DashboardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    /// Drive enough passes for a navigation to remount the routed view.
    pub fn settle(&mut self) {
        for _ in 0..4 {
            drive_dom(&mut self.dom);
        }
    }

    pub fn current_route(&self) -> String {
        self.history.current_route()
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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
    let sink = Arc::new(InMemorySink::new());
    let services = AppServices::new(
        fixed_clock(),
        ExportSettings {
            delay: Duration::ZERO,
        },
        Arc::new(StaticAuthenticator::demo()),
        Arc::clone(&sink) as Arc<dyn services::ReportSink>,
    );
    let session_store = services.session_store();
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(view.route()));
    let login_handles = LoginTestHandles::default();
    let dashboard_handles = DashboardTestHandles::default();

    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            history: Rc::clone(&history),
            login_handles: login_handles.clone(),
            dashboard_handles: dashboard_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        session_store,
        sink,
        history,
        login_handles,
        dashboard_handles,
    }
}
