//! Route registry nodes.
//!
//! A [`Route`] describes one level of the console's navigable hierarchy: a
//! static path template segment (possibly empty for index routes, `:name`
//! for dynamic segments), an optional [`ViewId`] naming the view rendered at
//! that level, and child routes. Routes are shared via `Arc` so resolved
//! snapshots can reference them without cloning subtrees.
//!
//! # Example
//!
//! ```
//! use console_navigator::{Route, ViewId};
//!
//! let node = Route::new("node/:name")
//!     .view("node")
//!     .children(vec![
//!         Route::new(""),          // index: essentials
//!         Route::new("details"),
//!         Route::new("events"),
//!     ]);
//!
//! assert_eq!(node.config.path, "node/:name");
//! assert_eq!(node.config.view, Some(ViewId::new("node")));
//! assert_eq!(node.children.len(), 3);
//! ```

use std::fmt;
use std::sync::Arc;

/// Stable identifier for the view associated with a route.
///
/// The deployed console compared view components by reference identity to
/// decide whether two navigations stayed within the same entity category.
/// Components don't exist at this layer, so category identity is carried by
/// a per-route name compared by value instead. Two routes rendering the
/// same logical view (e.g. every `node/:name` sibling) share one `ViewId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewId(String);

impl ViewId {
    /// Create a view identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ViewId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Static configuration of a single route level.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Path template segment: literal (`"details"`), parameterized
    /// (`"node/:name"`), or empty for an index route.
    pub path: String,
    /// View rendered at this level, if any. Levels without a view (pure
    /// grouping routes) still contribute their path segment to matching.
    pub view: Option<ViewId>,
}

/// One level of the route hierarchy.
///
/// Built with the builder methods and registered on a router. The struct is
/// deliberately open: resolution and snapshot extraction read `config` and
/// `children` directly.
#[derive(Debug, Clone)]
pub struct Route {
    /// Static configuration for this level.
    pub config: RouteConfig,
    /// Child routes, matched against the path remainder after this level.
    pub children: Vec<Arc<Route>>,
}

impl Route {
    /// Create a route for the given path template segment.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            config: RouteConfig {
                path: path.into(),
                view: None,
            },
            children: Vec::new(),
        }
    }

    /// Associate a view with this route level.
    pub fn view(mut self, view: impl Into<ViewId>) -> Self {
        self.config.view = Some(view.into());
        self
    }

    /// Append a single child route.
    pub fn child(mut self, child: Route) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Replace the child routes.
    pub fn children(mut self, children: Vec<Route>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_builder() {
        let route = Route::new("apps").view("apps").child(Route::new(""));

        assert_eq!(route.config.path, "apps");
        assert_eq!(route.config.view.as_ref().map(ViewId::as_str), Some("apps"));
        assert_eq!(route.children.len(), 1);
        assert_eq!(route.children[0].config.path, "");
    }

    #[test]
    fn test_view_id_value_equality() {
        // Identity is by value: separately-constructed ids for the same view
        // compare equal, distinct views do not.
        assert_eq!(ViewId::new("node"), ViewId::from("node"));
        assert_ne!(ViewId::new("node"), ViewId::new("apps"));
    }

    #[test]
    fn test_route_without_view() {
        let route = Route::new("system");
        assert!(route.config.view.is_none());
    }
}
