use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use pgr_core::model::{Identity, PgrStatus, ReportDocument};
use pgr_core::time::local_date;
use tracing::{error, info};

use crate::Clock;
use crate::error::ExportError;
use crate::pdf::render_pdf;
use crate::sink::ReportSink;

/// Pause before the report is produced, long enough to show a loading state.
pub const DEFAULT_EXPORT_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSettings {
    pub delay: Duration,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_EXPORT_DELAY,
        }
    }
}

/// Result of a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub file_name: String,
    pub location: PathBuf,
    pub size_bytes: usize,
}

/// Produces the PGR summary PDF and hands it to a sink.
pub struct ExportService {
    clock: Clock,
    settings: ExportSettings,
    sink: Arc<dyn ReportSink>,
    in_flight: AtomicBool,
}

impl ExportService {
    #[must_use]
    pub fn new(clock: Clock, settings: ExportSettings, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            clock,
            settings,
            sink,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Build the report for the current identity and status.
    #[must_use]
    pub fn build_document(&self, identity: Option<Identity>, status: PgrStatus) -> ReportDocument {
        let now = self.clock.now();
        ReportDocument::new(now, local_date(now), identity, status)
    }

    /// Wait the configured delay, then render and deliver one report.
    ///
    /// The document is assembled after the delay, so it reflects the clock at
    /// delivery time.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::AlreadyRunning` if another export has not finished;
    /// no artifact is produced for that call.
    /// Returns `ExportError::Render` or `ExportError::Io` if rendering or
    /// delivery fails.
    pub async fn export(
        &self,
        identity: Option<Identity>,
        status: PgrStatus,
    ) -> Result<ExportedReport, ExportError> {
        let _guard = InFlight::acquire(&self.in_flight).ok_or(ExportError::AlreadyRunning)?;
        info!(event = "services.export.started", status = status.slug());

        if !self.settings.delay.is_zero() {
            tokio::time::sleep(self.settings.delay).await;
        }

        let result = self.produce(identity, status).await;
        match &result {
            Ok(report) => info!(
                event = "services.export.completed",
                file_name = %report.file_name,
                location = %report.location.display(),
                size_bytes = report.size_bytes
            ),
            Err(err) => error!(event = "services.export.failed", error = %err),
        }
        result
    }

    async fn produce(
        &self,
        identity: Option<Identity>,
        status: PgrStatus,
    ) -> Result<ExportedReport, ExportError> {
        let document = self.build_document(identity, status);
        let file_name = document.file_name();
        let bytes = render_pdf(&document)?;
        let size_bytes = bytes.len();
        let location = self.sink.deliver(&file_name, bytes).await?;

        Ok(ExportedReport {
            file_name,
            location,
            size_bytes,
        })
    }
}

/// Clears the in-flight flag when the export finishes or its future is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
