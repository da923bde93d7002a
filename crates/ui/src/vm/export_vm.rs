use services::{ExportError, ExportedReport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { file_name: String, location: String },
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportPhase {
    #[default]
    Idle,
    Exporting,
    Done(ExportOutcome),
}

/// Export button state: idle, running, or finished with a result to show.
///
/// A finished export can be triggered again; a running one cannot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportVm {
    phase: ExportPhase,
}

impl ExportVm {
    #[must_use]
    pub fn phase(&self) -> &ExportPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.phase == ExportPhase::Exporting
    }

    /// Move to `Exporting`. Returns false, changing nothing, if already there.
    pub fn begin(&mut self) -> bool {
        if self.is_exporting() {
            return false;
        }
        self.phase = ExportPhase::Exporting;
        true
    }

    /// Record the result of the running export.
    ///
    /// An overlapping call rejected by the service produced nothing, so it
    /// returns to idle without a notice.
    pub fn finish(&mut self, result: Result<ExportedReport, ExportError>) {
        let outcome = match result {
            Ok(report) => ExportOutcome::Saved {
                file_name: report.file_name,
                location: report.location.display().to_string(),
            },
            Err(ExportError::AlreadyRunning) => {
                self.phase = ExportPhase::Idle;
                return;
            }
            Err(_) => ExportOutcome::Failed,
        };
        self.phase = ExportPhase::Done(outcome);
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_exporting() {
            "Gerando PDF..."
        } else {
            "📄 Exportar Relatório PDF"
        }
    }

    /// Message shown under the actions once an export has finished.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match &self.phase {
            ExportPhase::Done(ExportOutcome::Saved { location, .. }) => {
                Some(format!("Relatório salvo em {location}"))
            }
            ExportPhase::Done(ExportOutcome::Failed) => {
                Some("Não foi possível gerar o relatório. Tente novamente.".to_string())
            }
            ExportPhase::Idle | ExportPhase::Exporting => None,
        }
    }
}
