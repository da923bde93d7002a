use pgr_core::model::PgrStatus;

/// Status selector held by the dashboard. Starts at `Active` on every mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusBoard {
    current: PgrStatus,
}

impl StatusBoard {
    #[must_use]
    pub fn current(self) -> PgrStatus {
        self.current
    }

    /// Switch to `next`. Returns false when it was already selected.
    pub fn select(&mut self, next: PgrStatus) -> bool {
        if self.current == next {
            return false;
        }
        self.current = next;
        true
    }

    #[must_use]
    pub fn badge(self) -> StatusBadgeVm {
        StatusBadgeVm::from(self.current)
    }

    #[must_use]
    pub fn options(self) -> Vec<StatusOptionVm> {
        PgrStatus::ALL
            .iter()
            .map(|&status| StatusOptionVm {
                status,
                icon: status.icon(),
                title: status.selector_title(),
                active: status == self.current,
            })
            .collect()
    }
}

/// What the status card shows for the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBadgeVm {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl From<PgrStatus> for StatusBadgeVm {
    fn from(status: PgrStatus) -> Self {
        Self {
            label: status.label(),
            color: status.color(),
            icon: status.icon(),
            description: status.description(),
        }
    }
}

/// One selector button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusOptionVm {
    pub status: PgrStatus,
    pub icon: &'static str,
    pub title: String,
    pub active: bool,
}

impl StatusOptionVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.active {
            "status-btn active"
        } else {
            "status-btn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselecting_is_a_no_op() {
        let mut board = StatusBoard::default();
        assert!(!board.select(PgrStatus::Active));
        assert_eq!(board.current(), PgrStatus::Active);
    }

    #[test]
    fn last_selection_wins() {
        let mut board = StatusBoard::default();
        assert!(board.select(PgrStatus::Pending));
        assert!(board.select(PgrStatus::InProgress));

        assert_eq!(board.badge(), StatusBadgeVm::from(PgrStatus::InProgress));
        assert_eq!(board.badge().label, "Em Andamento");
        assert_eq!(board.badge().color, "#f59e0b");
        assert_eq!(board.badge().icon, "↻");

        let active: Vec<_> = board
            .options()
            .into_iter()
            .filter(|option| option.active)
            .map(|option| option.status)
            .collect();
        assert_eq!(active, [PgrStatus::InProgress]);
    }
}
