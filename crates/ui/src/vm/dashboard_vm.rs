use pgr_core::model::Identity;

pub const COMPANY_NAME: &str = "TechSafety Solutions";
pub const SYSTEM_TAGLINE: &str = "Sistema de Gestão de Riscos";
pub const APP_VERSION: &str = "1.0.0";

/// A fixed figure in the indicators box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorVm {
    pub label: &'static str,
    pub value: u32,
}

pub const INDICATORS: [IndicatorVm; 3] = [
    IndicatorVm {
        label: "Riscos Identificados:",
        value: 24,
    },
    IndicatorVm {
        label: "Ações Implementadas:",
        value: 18,
    },
    IndicatorVm {
        label: "Em Andamento:",
        value: 6,
    },
];

pub const UPCOMING_ACTIONS: [&str; 3] = [
    "Treinamento de brigada - 15/11/2025",
    "Inspeção de EPIs - 20/11/2025",
    "Revisão do PGR - 30/11/2025",
];

/// Header text for the signed-in user.
#[must_use]
pub fn user_badge(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("👤 {identity}"),
        None => "👤".to_string(),
    }
}
