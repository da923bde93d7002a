/// Username of the single compiled-in demo account.
pub const DEMO_USERNAME: &str = "admin";
/// Password of the single compiled-in demo account.
pub const DEMO_PASSWORD: &str = "admin123";

/// A username/password pair as typed into the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The compiled-in demo pair.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Both fields were filled in. Whitespace counts as content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Exact, case-sensitive comparison of both fields.
    #[must_use]
    pub fn matches(&self, other: &Credentials) -> bool {
        self.username == other.username && self.password == other.password
    }
}

// Never print the password, even in debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
