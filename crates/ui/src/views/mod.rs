mod dashboard;
mod login;

pub use dashboard::{DashboardIntent, DashboardView};
pub use login::{LoginIntent, LoginView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
