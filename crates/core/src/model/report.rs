use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Identity, PgrStatus};
use crate::time::format_br_date;

pub const REPORT_TITLE: &str = "Relatório PGR";
pub const ORGANIZATION_NAME: &str = "TechSafety Solutions LTDA";
/// Author shown when nobody is signed in.
pub const FALLBACK_AUTHOR: &str = "Sistema";

/// Explanatory text printed under the status section.
pub const REPORT_BOILERPLATE: [&str; 7] = [
    "Este é um relatório simulado gerado pelo sistema de demonstração.",
    "Em produção, este documento conteria informações detalhadas sobre:",
    "- Análise de riscos identificados",
    "- Medidas de controle implementadas",
    "- Cronograma de ações preventivas",
    "- Treinamentos realizados",
    "- Indicadores de segurança",
];

const FILE_PREFIX: &str = "relatorio-pgr-";

/// One line of text placed on the report page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    pub font_size: f32,
    /// Distance from the top edge of an A4 page, in millimetres.
    pub top_mm: f32,
    pub left_mm: f32,
}

impl ReportLine {
    fn at(text: impl Into<String>, font_size: f32, top_mm: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            top_mm,
            left_mm: 20.0,
        }
    }
}

/// The PGR summary handed to the user as a download.
///
/// Built on demand and never kept after delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    generated_at: DateTime<Utc>,
    issued_on: NaiveDate,
    generated_by: Option<Identity>,
    status: PgrStatus,
}

impl ReportDocument {
    #[must_use]
    pub fn new(
        generated_at: DateTime<Utc>,
        issued_on: NaiveDate,
        generated_by: Option<Identity>,
        status: PgrStatus,
    ) -> Self {
        Self {
            generated_at,
            issued_on,
            generated_by,
            status,
        }
    }

    /// Identity printed as the author, or the system fallback.
    #[must_use]
    pub fn author(&self) -> &str {
        self.generated_by
            .as_ref()
            .map_or(FALLBACK_AUTHOR, Identity::as_str)
    }

    /// `relatorio-pgr-<unix millis>.pdf`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{FILE_PREFIX}{}.pdf", self.generated_at.timestamp_millis())
    }

    /// Page content in reading order.
    #[must_use]
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![
            ReportLine::at(REPORT_TITLE, 20.0, 20.0),
            ReportLine::at(ORGANIZATION_NAME, 12.0, 35.0),
            ReportLine::at(
                format!("Data de emissão: {}", format_br_date(self.issued_on)),
                12.0,
                45.0,
            ),
            ReportLine::at(format!("Gerado por: {}", self.author()), 12.0, 55.0),
            ReportLine::at("Status do PGR", 14.0, 75.0),
            ReportLine::at(format!("Status atual: {}", self.status.label()), 12.0, 85.0),
            ReportLine::at(
                format!("Descrição: {}", self.status.description()),
                12.0,
                95.0,
            ),
        ];

        let mut top = 120.0;
        for text in REPORT_BOILERPLATE {
            lines.push(ReportLine::at(text, 10.0, top));
            top += 10.0;
        }
        lines
    }
}
