use std::sync::Arc;

use services::{Clock, ExportService, SessionStore};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;

    fn session_store(&self) -> Arc<SessionStore>;
    fn export_service(&self) -> Arc<ExportService>;
}

/// Services shared by every view, provided once at the root of the tree.
#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    session_store: Arc<SessionStore>,
    export_service: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            session_store: app.session_store(),
            export_service: app.export_service(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session_store)
    }

    #[must_use]
    pub fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
