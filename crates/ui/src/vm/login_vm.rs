use pgr_core::model::Credentials;
use services::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginError {
    MissingFields,
    InvalidCredentials,
}

impl LoginError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            LoginError::MissingFields => "Por favor, preencha todos os campos",
            LoginError::InvalidCredentials => "Usuário ou senha inválidos",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Error(LoginError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    Rejected(LoginError),
}

/// State behind the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    phase: LoginPhase,
}

impl LoginForm {
    #[must_use]
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self.phase {
            LoginPhase::Idle => None,
            LoginPhase::Error(err) => Some(err.message()),
        }
    }

    /// Validate the fields and try to sign in.
    ///
    /// The previous message is cleared first. Empty fields never reach the
    /// session store. Fields are left as typed so the user can correct them.
    pub fn submit(&mut self, session: &SessionStore) -> LoginOutcome {
        self.phase = LoginPhase::Idle;

        let credentials = Credentials::new(self.username.as_str(), self.password.as_str());
        let outcome = if !credentials.is_complete() {
            LoginOutcome::Rejected(LoginError::MissingFields)
        } else if session.sign_in(&credentials) {
            LoginOutcome::SignedIn
        } else {
            LoginOutcome::Rejected(LoginError::InvalidCredentials)
        };

        if let LoginOutcome::Rejected(err) = outcome {
            self.phase = LoginPhase::Error(err);
        }
        outcome
    }
}
