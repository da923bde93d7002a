use std::sync::{Arc, PoisonError, RwLock};

use pgr_core::model::{Credentials, Identity, Session};
use tracing::{info, warn};

use crate::auth::{Authenticator, StaticAuthenticator};

/// Owns the sign-in state shared by the login and dashboard views.
///
/// Constructed once by the composition root and handed to the UI through its
/// context. Every operation is total; a rejected sign-in is reported only
/// through the returned boolean.
pub struct SessionStore {
    authenticator: Arc<dyn Authenticator>,
    session: RwLock<Session>,
}

impl SessionStore {
    #[must_use]
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            authenticator,
            session: RwLock::new(Session::signed_out()),
        }
    }

    /// Store backed by the compiled-in demo account.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Arc::new(StaticAuthenticator::demo()))
    }

    /// Sign in with a submitted pair.
    ///
    /// On success the identity becomes the submitted username. On failure the
    /// current session is left as it was.
    pub fn sign_in(&self, credentials: &Credentials) -> bool {
        if !self.authenticator.verify(credentials) {
            warn!(
                event = "services.session.sign_in_rejected",
                username = credentials.username()
            );
            return false;
        }

        let Ok(identity) = Identity::new(credentials.username()) else {
            warn!(event = "services.session.sign_in_rejected", reason = "empty username");
            return false;
        };

        info!(
            event = "services.session.sign_in_succeeded",
            identity = identity.as_str()
        );
        *self.session.write().unwrap_or_else(PoisonError::into_inner) =
            Session::signed_in(identity);
        true
    }

    /// Clear the session regardless of its previous state.
    pub fn sign_out(&self) {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(identity) = session.identity() {
            info!(event = "services.session.sign_out", identity = identity.as_str());
        }
        *session = Session::signed_out();
    }

    #[must_use]
    pub fn current_user(&self) -> Option<Identity> {
        self.snapshot().identity().cloned()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_signed_in()
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.snapshot())
            .finish_non_exhaustive()
    }
}
