use pgr_core::model::Credentials;

/// Decides whether a submitted credential pair may sign in.
///
/// Views only ever see the boolean answer, so a hashed lookup or an external
/// identity provider can replace the static check without touching them.
pub trait Authenticator: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> bool;
}

/// Accepts exactly one compiled-in pair.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    accepted: Credentials,
}

impl StaticAuthenticator {
    #[must_use]
    pub fn new(accepted: Credentials) -> Self {
        Self { accepted }
    }

    /// The demo account (`admin` / `admin123`).
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Credentials::demo())
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self::demo()
    }
}

impl Authenticator for StaticAuthenticator {
    fn verify(&self, credentials: &Credentials) -> bool {
        credentials.matches(&self.accepted)
    }
}
