mod credentials;
mod report;
mod session;
mod status;

pub use credentials::{Credentials, DEMO_PASSWORD, DEMO_USERNAME};
pub use report::{
    FALLBACK_AUTHOR, ORGANIZATION_NAME, REPORT_BOILERPLATE, REPORT_TITLE, ReportDocument,
    ReportLine,
};
pub use session::{Identity, IdentityError, Session};
pub use status::PgrStatus;
