#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod error;
pub mod export;
pub mod pdf;
pub mod session_store;
pub mod sink;

pub use pgr_core::Clock;

pub use app_services::AppServices;
pub use auth::{Authenticator, StaticAuthenticator};
pub use error::ExportError;
pub use export::{ExportService, ExportSettings, ExportedReport};
pub use session_store::SessionStore;
pub use sink::{DeliveredReport, DownloadDirSink, InMemorySink, ReportSink};
