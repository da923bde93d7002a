/// Compliance status of the risk management programme shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PgrStatus {
    #[default]
    Active,
    InProgress,
    Pending,
}

impl PgrStatus {
    /// Selector order.
    pub const ALL: [PgrStatus; 3] = [PgrStatus::Active, PgrStatus::InProgress, PgrStatus::Pending];

    /// Stable lowercase key, used for element ids and CSS modifiers.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            PgrStatus::Active => "ativo",
            PgrStatus::InProgress => "em_andamento",
            PgrStatus::Pending => "pendente",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PgrStatus::Active => "Ativo",
            PgrStatus::InProgress => "Em Andamento",
            PgrStatus::Pending => "Pendente",
        }
    }

    /// Hex color of the indicator.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            PgrStatus::Active => "#10b981",
            PgrStatus::InProgress => "#f59e0b",
            PgrStatus::Pending => "#ef4444",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            PgrStatus::Active => "✓",
            PgrStatus::InProgress => "↻",
            PgrStatus::Pending => "!",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            PgrStatus::Active => "PGR está em conformidade",
            PgrStatus::InProgress => "Revisão em processo",
            PgrStatus::Pending => "Requer atenção imediata",
        }
    }

    /// Tooltip of the selector button that switches to this status.
    #[must_use]
    pub fn selector_title(self) -> String {
        format!("Mudar para {}", self.label())
    }
}

impl std::fmt::Display for PgrStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
