//! Navigation outcomes.
//!
//! The router's only failure mode is a URL that matches no registered
//! route, so the outcome type is deliberately small. There is no error
//! taxonomy beyond this: path builders cannot fail for valid string inputs,
//! and malformed router event sequences are precondition violations that
//! panic rather than surface as values — a reconciler bug must degrade to a
//! missing redirect, never to masked state corruption.

use std::fmt;

/// Outcome of a navigation attempt.
///
/// Returned by every [`ConsoleRouter`](crate::ConsoleRouter) navigation
/// method.
///
/// # Examples
///
/// ```
/// use console_navigator::NavigationResult;
///
/// let result = NavigationResult::Success { path: "/nodes".into() };
/// assert!(result.is_success());
/// assert_eq!(result.path(), "/nodes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// Navigation succeeded
    Success {
        /// The path that became current.
        path: String,
    },
    /// Route not found
    NotFound {
        /// The path that matched no registered route.
        path: String,
    },
}

impl NavigationResult {
    /// Check if navigation was successful
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationResult::Success { .. })
    }

    /// Check if route was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationResult::NotFound { .. })
    }

    /// The path this outcome refers to, whichever variant it is.
    pub fn path(&self) -> &str {
        match self {
            NavigationResult::Success { path } | NavigationResult::NotFound { path } => path,
        }
    }
}

impl fmt::Display for NavigationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationResult::Success { path } => write!(f, "navigated to {}", path),
            NavigationResult::NotFound { path } => write!(f, "no route matched {}", path),
        }
    }
}
