//! Admin authentication gate.
//!
//! Decides whether a caller of the admin panel sees the login form or the
//! backfill dashboard. The decision depends on nothing but [`AuthStatus`].

/// Authentication state of the current admin session.
///
/// Resolved from the session cookie before any admin page renders, so there is
/// no "checking" state to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl AuthStatus {
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

/// The page an admin route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Login,
    Dashboard,
}

/// Selects the admin view for an authentication status.
///
/// Login iff unauthenticated, dashboard iff authenticated.
pub fn admin_gate(status: AuthStatus) -> AdminView {
    match status {
        AuthStatus::Unauthenticated => AdminView::Login,
        AuthStatus::Authenticated => AdminView::Dashboard,
    }
}
