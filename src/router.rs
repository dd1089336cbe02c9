//! The console router host.
//!
//! [`ConsoleRouter`] ties the pieces together: it owns the route registry,
//! the history stack, the [`RouteReconciler`], and the deferred-redirect
//! queue. Every navigation runs the same pipeline:
//!
//! 1. Resolve the URL against the registry (through the LRU cache when the
//!    `cache` feature is enabled). An unmatched URL short-circuits to
//!    [`NavigationResult::NotFound`] without touching history.
//! 2. Move the history stack.
//! 3. Replay the navigation lifecycle to the reconciler: one
//!    `ChildActivated` per matched level (outermost first, each carrying
//!    the chain resolved so far), then a single `NavigationEnded`.
//! 4. Queue any redirect the reconciler answered with.
//!
//! Queued redirects never run re-entrantly. The host calls
//! [`settle`](ConsoleRouter::settle) once the current navigation turn is
//! over — the single-threaded analogue of deferring by one macrotask. A
//! navigation that arrives before `settle` does **not** cancel an already
//! queued redirect; the redirect then targets a stale URL. That race is an
//! accepted property of the reconciliation design, kept rather than papered
//! over with cancellation semantics.
//!
//! # Example
//!
//! ```
//! use console_navigator::{ConsoleRouter, Route};
//!
//! let mut router = ConsoleRouter::new();
//! router.add_route(Route::new("node/:name").view("node").children(vec![
//!     Route::new(""),
//!     Route::new("details"),
//! ]));
//!
//! router.push("/node/seed-1/details");
//! router.push("/node/seed-2");
//! router.settle();
//!
//! // The details tab followed the user to the sibling node.
//! assert_eq!(router.current_path(), "/node/seed-2/details");
//! ```

#[cfg(feature = "cache")]
use crate::cache::ResolveCache;
use crate::error::NavigationResult;
use crate::reconciler::{RouteReconciler, RouterEvent};
#[cfg(feature = "cache")]
use crate::resolve::normalize_path;
use crate::resolve::resolve_snapshot;
use crate::route::Route;
use crate::snapshot::RouteSnapshot;
use crate::state::RouterState;
use crate::{debug_log, error_log, info_log, warn_log};
use std::collections::VecDeque;
use std::sync::Arc;

/// Upper bound on redirects executed per [`settle`](ConsoleRouter::settle)
/// call. A healthy reconciliation converges in one step; the bound exists
/// so a miswired registry cannot spin forever.
const MAX_SETTLE_STEPS: usize = 8;

/// Router host: registry, history, reconciler, and deferred redirects.
pub struct ConsoleRouter {
    routes: Vec<Arc<Route>>,
    state: RouterState,
    reconciler: RouteReconciler,
    deferred: VecDeque<String>,
    #[cfg(feature = "cache")]
    cache: ResolveCache,
}

impl ConsoleRouter {
    /// Create a router with an empty registry, positioned at `/`.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            state: RouterState::new(),
            reconciler: RouteReconciler::new(),
            deferred: VecDeque::new(),
            #[cfg(feature = "cache")]
            cache: ResolveCache::new(),
        }
    }

    /// Register a top-level route.
    pub fn add_route(&mut self, route: Route) {
        info_log!("registered route '{}'", route.config.path);
        self.routes.push(Arc::new(route));
        // Cached chains reference the old registry shape.
        #[cfg(feature = "cache")]
        self.cache.clear();
    }

    /// Registered top-level routes.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// The current location.
    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    /// History state, for back/forward availability checks.
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// The reconciler, for inspecting the remembered selection.
    pub fn reconciler(&self) -> &RouteReconciler {
        &self.reconciler
    }

    /// Resolution cache statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &crate::cache::CacheStats {
        self.cache.stats()
    }

    /// Navigate to a path, pushing a history entry.
    pub fn push(&mut self, path: &str) -> NavigationResult {
        let Some(snapshot) = self.resolve(path) else {
            warn_log!("no route matched '{}'", path);
            return NavigationResult::NotFound {
                path: path.to_string(),
            };
        };

        let event = self.state.push(path.to_string());
        self.emit_navigation(&snapshot, &event.to);

        info_log!("navigation complete: '{}'", event.to);
        NavigationResult::Success { path: event.to }
    }

    /// Navigate to a path, replacing the current history entry.
    pub fn replace(&mut self, path: &str) -> NavigationResult {
        let Some(snapshot) = self.resolve(path) else {
            warn_log!("no route matched '{}'", path);
            return NavigationResult::NotFound {
                path: path.to_string(),
            };
        };

        let event = self.state.replace(path.to_string());
        self.emit_navigation(&snapshot, &event.to);

        info_log!("navigation complete (replace): '{}'", event.to);
        NavigationResult::Success { path: event.to }
    }

    /// Go back in history. Returns `None` at the oldest entry.
    ///
    /// History movements replay the navigation lifecycle too — a tab
    /// restored by the reconciler behaves the same whether the sibling was
    /// reached by link or by the back button.
    pub fn back(&mut self) -> Option<NavigationResult> {
        let target = self.state.peek_back_path()?.to_string();
        let Some(snapshot) = self.resolve(&target) else {
            warn_log!("history entry '{}' no longer resolves", target);
            return Some(NavigationResult::NotFound { path: target });
        };

        let event = self.state.back().expect("back() should succeed after peek");
        self.emit_navigation(&snapshot, &event.to);
        Some(NavigationResult::Success { path: event.to })
    }

    /// Go forward in history. Returns `None` at the newest entry.
    pub fn forward(&mut self) -> Option<NavigationResult> {
        let target = self.state.peek_forward_path()?.to_string();
        let Some(snapshot) = self.resolve(&target) else {
            warn_log!("history entry '{}' no longer resolves", target);
            return Some(NavigationResult::NotFound { path: target });
        };

        let event = self
            .state
            .forward()
            .expect("forward() should succeed after peek");
        self.emit_navigation(&snapshot, &event.to);
        Some(NavigationResult::Success { path: event.to })
    }

    /// Number of queued redirects waiting for [`settle`](Self::settle).
    pub fn pending_redirects(&self) -> usize {
        self.deferred.len()
    }

    /// Run queued redirects now that the current navigation turn is over.
    ///
    /// Returns the number of redirects executed. Redirects run in queue
    /// order and may enqueue again; execution stops at `MAX_SETTLE_STEPS`,
    /// dropping the rest with an error log.
    pub fn settle(&mut self) -> usize {
        let mut steps = 0;
        while let Some(target) = self.deferred.pop_front() {
            if steps >= MAX_SETTLE_STEPS {
                error_log!(
                    "deferred redirect limit reached after {} steps, dropping '{}' and {} more",
                    steps,
                    target,
                    self.deferred.len()
                );
                self.deferred.clear();
                break;
            }
            debug_log!("running deferred redirect to '{}'", target);
            self.push(&target);
            steps += 1;
        }
        steps
    }

    /// Resolve a path, consulting the LRU cache when enabled.
    fn resolve(&mut self, path: &str) -> Option<RouteSnapshot> {
        #[cfg(feature = "cache")]
        let resolved = {
            let key = normalize_path(path).into_owned();
            if let Some(hit) = self.cache.get(&key) {
                Some(hit.clone())
            } else {
                let resolved = resolve_snapshot(&self.routes, path);
                if let Some(chain) = &resolved {
                    self.cache.insert(key, chain.clone());
                }
                resolved
            }
        };

        #[cfg(not(feature = "cache"))]
        let resolved = resolve_snapshot(&self.routes, path);

        resolved
    }

    /// Replay one completed navigation to the reconciler and queue any
    /// redirect it answers with.
    fn emit_navigation(&mut self, snapshot: &RouteSnapshot, url: &str) {
        let levels = snapshot.depth();
        for level in 1..=levels {
            self.reconciler.on_event(RouterEvent::ChildActivated {
                snapshot: snapshot.truncated(level),
            });
        }

        if let Some(redirect) = self.reconciler.on_event(RouterEvent::NavigationEnded {
            url: url.to_string(),
        }) {
            debug_log!("queueing deferred redirect to '{}'", redirect.to);
            self.deferred.push_back(redirect.to);
        }
    }
}

impl Default for ConsoleRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_router() -> ConsoleRouter {
        let mut router = ConsoleRouter::new();
        router.add_route(Route::new("").view("cluster"));
        router.add_route(Route::new("node/:name").view("node").children(vec![
            Route::new(""),
            Route::new("details"),
            Route::new("events"),
        ]));
        router.add_route(Route::new("apps").view("apps"));
        router
    }

    #[test]
    fn test_push_success_and_not_found() {
        let mut router = node_router();

        assert!(router.push("/node/seed-1").is_success());
        assert_eq!(router.current_path(), "/node/seed-1");

        let missing = router.push("/bogus");
        assert!(missing.is_not_found());
        // A failed navigation leaves the location untouched.
        assert_eq!(router.current_path(), "/node/seed-1");
    }

    #[test]
    fn test_sibling_redirect_is_deferred_until_settle() {
        let mut router = node_router();
        router.push("/node/seed-1/details");
        router.push("/node/seed-2");

        // Decision made, navigation not yet mutated.
        assert_eq!(router.pending_redirects(), 1);
        assert_eq!(router.current_path(), "/node/seed-2");

        assert_eq!(router.settle(), 1);
        assert_eq!(router.current_path(), "/node/seed-2/details");
        assert_eq!(router.pending_redirects(), 0);
    }

    #[test]
    fn test_settle_with_nothing_queued() {
        let mut router = node_router();
        router.push("/node/seed-1");
        assert_eq!(router.settle(), 0);
    }

    #[test]
    fn test_replace_keeps_history_depth() {
        let mut router = node_router();
        router.push("/node/seed-1");
        router.replace("/apps");

        assert_eq!(router.current_path(), "/apps");
        assert!(router.state().can_go_back());
        router.back();
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn test_back_replays_lifecycle() {
        let mut router = node_router();
        router.push("/node/seed-1/details");
        router.push("/apps");
        router.settle();

        // Going back re-enters the node category; the memory was reset by
        // the category switch, so no redirect fires.
        let result = router.back().unwrap();
        assert!(result.is_success());
        assert_eq!(router.current_path(), "/node/seed-1/details");
        assert_eq!(router.pending_redirects(), 0);
    }

    #[cfg(feature = "cache")]
    #[test]
    fn test_repeat_navigation_hits_cache() {
        let mut router = node_router();
        router.push("/node/seed-1/details");
        router.push("/apps");
        router.push("/node/seed-1/details");

        assert!(router.cache_stats().hits >= 1);
    }

    #[cfg(feature = "cache")]
    #[test]
    fn test_add_route_invalidates_cache() {
        let mut router = node_router();
        router.push("/node/seed-1");
        let before = router.cache_stats().invalidations;

        router.add_route(Route::new("networks").view("networks"));
        assert_eq!(router.cache_stats().invalidations, before + 1);
    }
}
