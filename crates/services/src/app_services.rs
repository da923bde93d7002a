use std::path::PathBuf;
use std::sync::Arc;

use crate::Clock;
use crate::auth::{Authenticator, StaticAuthenticator};
use crate::export::{ExportService, ExportSettings};
use crate::session_store::SessionStore;
use crate::sink::{DownloadDirSink, ReportSink};

/// Assembles the app-facing services once, at the composition root.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    session_store: Arc<SessionStore>,
    export: Arc<ExportService>,
}

impl AppServices {
    /// Services that authenticate against the demo account and save reports
    /// into `download_dir`.
    #[must_use]
    pub fn with_download_dir(
        clock: Clock,
        settings: ExportSettings,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self::new(
            clock,
            settings,
            Arc::new(StaticAuthenticator::demo()),
            Arc::new(DownloadDirSink::new(download_dir)),
        )
    }

    #[must_use]
    pub fn new(
        clock: Clock,
        settings: ExportSettings,
        authenticator: Arc<dyn Authenticator>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            clock,
            session_store: Arc::new(SessionStore::new(authenticator)),
            export: Arc::new(ExportService::new(clock, settings, sink)),
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
    pub fn export(&self) -> Arc<ExportService> {
        Arc::clone(&self.export)
    }
}
