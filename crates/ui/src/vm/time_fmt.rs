use pgr_core::Clock;
use pgr_core::time::format_br_date;

/// Today's date as the dashboard prints it (`dd/mm/yyyy`).
#[must_use]
pub fn format_today(clock: &Clock) -> String {
    format_br_date(clock.today())
}
