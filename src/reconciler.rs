//! Tab-restoring navigation reconciliation.
//!
//! Admin consoles for clustered systems share a browsing pattern: open one
//! node's details tab, then flip to the next node to compare. A plain
//! router lands the second navigation on the sibling's default view and the
//! selected tab is lost. The [`RouteReconciler`] watches the navigation
//! lifecycle and, when it sees a move between sibling entities of the same
//! category, answers with a follow-up redirect that re-appends the
//! last-viewed sub-path — `/node/A/details` → `/node/B` becomes
//! `/node/B/details`.
//!
//! The memory resets when the user leaves the category: viewing a node's
//! details, then applications, then a node again lands on the node default
//! view, not details.
//!
//! # Event contract
//!
//! The reconciler consumes an ordered stream of [`RouterEvent`]s. Per
//! navigation the stream carries one `ChildActivated` per matched nesting
//! level (nested route trees activate in sequence, and only the deepest
//! activation carries the full snapshot chain) followed by exactly one
//! `NavigationEnded`. Only the *last* activation before a `NavigationEnded`
//! is kept; it is consumed when the navigation completes, so a completion
//! without a fresh activation is a contract violation and panics rather
//! than silently reusing stale state.
//!
//! # Decision rules
//!
//! On `NavigationEnded`, comparing the previous navigation's descriptor
//! with the new one:
//!
//! - Different first view ⇒ different entity category: remember the new
//!   trailing segment, no redirect.
//! - Same category, parameter value sets equal ⇒ same entity revisited:
//!   remember the new trailing segment, no redirect.
//! - Same category, parameter value sets differ ⇒ sibling entity: if the
//!   remembered segment is non-empty and differs from the new one, answer
//!   with a redirect to the decoded navigation URL plus the remembered
//!   segment. The remembered segment is deliberately left untouched here —
//!   it reflects the deepest stable selection and must not be clobbered by
//!   the navigation the redirect is about to override.
//!
//! The redirect is *returned*, not executed: the caller queues it and runs
//! it after the current navigation has fully settled, so an in-flight
//! navigation is never mutated re-entrantly
//! (see [`ConsoleRouter::settle`](crate::ConsoleRouter::settle)).

use crate::params::RouteParams;
use crate::route::ViewId;
use crate::snapshot::{path_data, PathData, RouteSnapshot};
use crate::{debug_log, trace_log};

/// Navigation lifecycle events consumed by the reconciler.
#[derive(Debug, Clone)]
pub enum RouterEvent {
    /// One nesting level of the in-flight navigation finished activating.
    /// Fires once per level; the snapshot carries the chain resolved so far.
    ChildActivated {
        /// Chain resolved up to and including the activated level.
        snapshot: RouteSnapshot,
    },
    /// The navigation fully resolved. Fires exactly once, after every
    /// activation for that navigation.
    NavigationEnded {
        /// The resolved URL of the completed navigation.
        url: String,
    },
}

/// A follow-up navigation the reconciler wants executed once the current
/// navigation has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRedirect {
    /// Absolute path to navigate to.
    pub to: String,
}

/// Observes navigation lifecycle events and decides tab-restoring
/// redirects.
///
/// Holds the state of the *last completed* navigation — never an in-flight
/// one: activations only park a snapshot in a transient holder, and the
/// remembered descriptor is overwritten at `NavigationEnded` alone. All
/// mutation happens through [`on_event`](Self::on_event), called from the
/// single event-handling turn; the type is plain data with no interior
/// mutability.
#[derive(Debug, Default)]
pub struct RouteReconciler {
    /// Views of the previous navigation, ancestors first.
    previous_views: Vec<ViewId>,
    /// Parameter map of the previous navigation.
    previous_params: RouteParams,
    /// Remembered trailing segment — the tab to restore on sibling moves.
    previous_postfix: String,
    /// Last activation seen since the previous completed navigation.
    retained_activation: Option<RouteSnapshot>,
}

impl RouteReconciler {
    /// Create a reconciler with no navigation history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one lifecycle event; returns a redirect when one is due.
    ///
    /// # Panics
    ///
    /// Panics if a `NavigationEnded` arrives without a `ChildActivated`
    /// since the previous completed navigation. That ordering is the
    /// router's contract; masking a violation here would leave a
    /// navigation bug silently undebuggable.
    pub fn on_event(&mut self, event: RouterEvent) -> Option<PendingRedirect> {
        match event {
            RouterEvent::ChildActivated { snapshot } => {
                // Multiple activations per navigation; the last one wins
                // because only it carries the complete chain.
                trace_log!(
                    "retaining activation at depth {} ('{}')",
                    snapshot.depth(),
                    snapshot.path_segment
                );
                self.retained_activation = Some(snapshot);
                None
            }
            RouterEvent::NavigationEnded { url } => {
                let activation = self
                    .retained_activation
                    .take()
                    .expect("navigation ended without a child activation since the last one");
                let data = path_data(&activation);

                let redirect = self.reconcile(&data, &url);

                // Views and params always track the completed navigation;
                // the postfix is only adopted inside reconcile's branches.
                self.previous_views = data.last_views;
                self.previous_params = data.params;

                redirect
            }
        }
    }

    /// The currently remembered trailing segment.
    pub fn remembered_postfix(&self) -> &str {
        &self.previous_postfix
    }

    /// Compare the completed navigation against the previous one.
    fn reconcile(&mut self, data: &PathData, url: &str) -> Option<PendingRedirect> {
        // Category check on the outermost view: all sibling entities of a
        // kind route through the same view, so equal heads mean the user
        // stayed within the category.
        if self.previous_views.first() == data.last_views.first() {
            if self.previous_params.same_value_set(&data.params) {
                // Same entity revisited: the selection just navigated to is
                // the new stable one.
                trace_log!("same entity, remembering postfix '{}'", data.path_postfix);
                self.previous_postfix = data.path_postfix.clone();
            } else if self.previous_postfix != data.path_postfix
                && !self.previous_postfix.is_empty()
            {
                // Sibling entity lost the sub-view selection: restore it on
                // top of the URL just navigated to. The URL was encoded for
                // the address bar; redirect against its decoded form.
                let decoded = urlencoding::decode(url)
                    .expect("navigated url is not valid percent-encoding");
                let target = format!("{}/{}", decoded, self.previous_postfix);
                debug_log!(
                    "sibling entity detected, restoring '{}' via '{}'",
                    self.previous_postfix,
                    target
                );
                return Some(PendingRedirect { to: target });
            }
        } else {
            // Category switch resets the memory.
            trace_log!(
                "category changed, remembering postfix '{}'",
                data.path_postfix
            );
            self.previous_postfix = data.path_postfix.clone();
        }

        None
    }
}
