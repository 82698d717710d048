/// The identity of the currently signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: String,
}

impl Session {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// The identity string attached to submissions as the publisher.
    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Source of the current session, supplied by the external sign-in flow.
pub trait SessionProvider {
    /// The active session, or `None` when nobody is signed in.
    fn session(&self) -> Option<Session>;
}

impl SessionProvider for Option<Session> {
    fn session(&self) -> Option<Session> {
        self.clone()
    }
}
