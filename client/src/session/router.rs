//! Role-based session routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` is the entry point after login. The router reads the token
//! from the injected [`Session`], resolves a [`Verdict`] and performs exactly
//! one navigation: to the login page, or to the role's own dashboard.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use super::{Role, Route, Session, SessionError, decode_claims};

/// Outcome of inspecting the stored token.
#[derive(Debug)]
pub enum Verdict {
    /// No token stored.
    Anonymous,
    /// A token is stored but cannot be used for routing.
    Rejected(SessionError),
    Authorized { role: Role, subject: Option<String> },
}

impl Verdict {
    /// Total mapping from verdict to navigation target.
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Verdict::Anonymous | Verdict::Rejected(_) => Route::Login,
            Verdict::Authorized { role, .. } => Route::Dashboard(*role),
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Verdict::Authorized { role, .. } => Some(*role),
            _ => None,
        }
    }
}

/// Resolve a verdict for an optional stored token.
///
/// An absent token short-circuits before any decode is attempted.
#[must_use]
pub fn resolve(token: Option<&str>) -> Verdict {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        return Verdict::Anonymous;
    };
    match decode_claims(token).and_then(|claims| Ok((claims.role()?, claims.sub))) {
        Ok((role, subject)) => Verdict::Authorized { role, subject },
        Err(e) => Verdict::Rejected(e),
    }
}

/// One-shot router over an injected session.
pub struct SessionRouter<'a> {
    session: &'a Session,
}

impl<'a> SessionRouter<'a> {
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Resolve the session and hand the destination path to `navigate`.
    ///
    /// `navigate` is called exactly once. The verdict is returned so callers
    /// can render a reason alongside the redirect.
    pub fn evaluate<F>(&self, navigate: F) -> Verdict
    where
        F: FnOnce(&'static str),
    {
        let verdict = self.session.verdict();
        match &verdict {
            Verdict::Anonymous => log::debug!("no session token; routing to login"),
            Verdict::Rejected(e) => log::warn!("session token rejected: {e}"),
            Verdict::Authorized { role, subject } => {
                log::debug!("session for {} resolved to role {role}", subject.as_deref().unwrap_or("?"));
            }
        }
        navigate(verdict.route().path());
        verdict
    }
}
