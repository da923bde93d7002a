mod dashboard_vm;
mod export_vm;
mod login_vm;
mod status_vm;
mod time_fmt;

pub use dashboard_vm::{
    APP_VERSION, COMPANY_NAME, INDICATORS, IndicatorVm, SYSTEM_TAGLINE, UPCOMING_ACTIONS,
    user_badge,
};
pub use export_vm::{ExportOutcome, ExportPhase, ExportVm};
pub use login_vm::{LoginError, LoginForm, LoginOutcome, LoginPhase};
pub use status_vm::{StatusBadgeVm, StatusBoard, StatusOptionVm};
pub use time_fmt::format_today;
