//! Matched-route snapshots and the navigation descriptor extractor.
//!
//! A [`RouteSnapshot`] is the immutable record of what one navigation
//! matched: a chain of levels from the outermost route down to the deepest,
//! linked through `first_child`. Snapshots are produced by
//! [`resolve_snapshot`](crate::resolve::resolve_snapshot) and consumed by
//! [`path_data`], which flattens a chain into the ephemeral [`PathData`]
//! descriptor the redirect reconciler compares between navigations.
//!
//! Every level of a chain carries the navigation's complete parameter map.
//! The extractor reads parameters exactly once — from the node it is handed
//! — while views and the trailing segment come from the walk, so a caller
//! holding any suffix of the chain still observes the full entity identity.

use crate::params::RouteParams;
use crate::route::ViewId;
use crate::trace_log;

/// One navigation's matched route chain.
///
/// Each node records the static path template segment it matched, the view
/// (if any) rendered at that level, the navigation's parameter map, and the
/// next-deeper level. The chain is singly owned: dropping the head drops
/// the whole navigation record.
#[derive(Debug, Clone)]
pub struct RouteSnapshot {
    /// Complete parameter map of the navigation this snapshot belongs to.
    pub params: RouteParams,
    /// Path template segment of the matched route level (e.g. `"node/:name"`,
    /// `"details"`, or `""` for an index route).
    pub path_segment: String,
    /// View rendered at this level, if the route declares one.
    pub view: Option<ViewId>,
    /// Next-deeper matched level, if any.
    pub first_child: Option<Box<RouteSnapshot>>,
}

impl RouteSnapshot {
    /// Create a leaf snapshot node.
    pub fn new(
        path_segment: impl Into<String>,
        view: Option<ViewId>,
        params: RouteParams,
    ) -> Self {
        Self {
            params,
            path_segment: path_segment.into(),
            view,
            first_child: None,
        }
    }

    /// Attach the next-deeper level, consuming and returning `self`.
    pub fn with_child(mut self, child: RouteSnapshot) -> Self {
        self.first_child = Some(Box::new(child));
        self
    }

    /// Number of levels in the chain, this node included.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = Some(self);
        while let Some(node) = current {
            depth += 1;
            current = node.first_child.as_deref();
        }
        depth
    }

    /// Clone of the chain cut to at most `levels` levels.
    ///
    /// Used when replaying the sequenced activation of nested routes: the
    /// activation for level `n` only knows about the chain resolved so far.
    /// `levels` of zero is treated as one — a snapshot always has its head.
    pub fn truncated(&self, levels: usize) -> RouteSnapshot {
        let keep = levels.max(1);

        // Collect the first `keep` levels, childless.
        let mut nodes = Vec::with_capacity(keep);
        let mut current = Some(self);
        while let Some(node) = current {
            if nodes.len() == keep {
                break;
            }
            nodes.push(RouteSnapshot::new(
                node.path_segment.clone(),
                node.view.clone(),
                node.params.clone(),
            ));
            current = node.first_child.as_deref();
        }

        // Relink from the deepest kept level up.
        let mut chain: Option<RouteSnapshot> = None;
        for mut node in nodes.into_iter().rev() {
            node.first_child = chain.take().map(Box::new);
            chain = Some(node);
        }
        chain.unwrap_or_else(|| {
            RouteSnapshot::new(
                self.path_segment.clone(),
                self.view.clone(),
                self.params.clone(),
            )
        })
    }
}

/// Flat descriptor of one navigation, derived from a snapshot chain.
///
/// Created per navigation-completed event and discarded once the redirect
/// decision has been made; nothing here outlives the event that produced it.
#[derive(Debug, Clone, Default)]
pub struct PathData {
    /// Views encountered along the chain, ancestors first. Levels without a
    /// view contribute nothing here.
    pub last_views: Vec<ViewId>,
    /// The deepest level's path template segment. Overwritten at every
    /// level of the walk — last write wins, segments are never joined.
    pub path_postfix: String,
    /// Parameter map captured once, from the topmost node handed in.
    pub params: RouteParams,
}

/// Flatten a snapshot chain into a [`PathData`] descriptor.
///
/// Walks from `snapshot` through each `first_child` link. At every node the
/// trailing segment is overwritten with that node's own template segment,
/// so the final value belongs to the deepest node; a node without a view
/// still contributes its segment through the overwrite. Parameters are read
/// once from `snapshot` itself, not re-read or merged during the descent.
///
/// # Example
///
/// ```
/// use console_navigator::{path_data, RouteParams, RouteSnapshot, ViewId};
///
/// let chain = RouteSnapshot::new("node/:name", Some(ViewId::new("node")), RouteParams::new())
///     .with_child(RouteSnapshot::new("details", None, RouteParams::new()));
///
/// let data = path_data(&chain);
/// assert_eq!(data.path_postfix, "details");
/// assert_eq!(data.last_views, vec![ViewId::new("node")]);
/// ```
pub fn path_data(snapshot: &RouteSnapshot) -> PathData {
    let mut data = PathData {
        params: snapshot.params.clone(),
        path_postfix: String::new(),
        last_views: Vec::new(),
    };

    let mut current = Some(snapshot);
    while let Some(node) = current {
        data.path_postfix = node.path_segment.clone();
        if let Some(view) = &node.view {
            data.last_views.push(view.clone());
        }
        current = node.first_child.as_deref();
    }

    trace_log!(
        "path_data: views={:?}, postfix='{}', {} params",
        data.last_views,
        data.path_postfix,
        data.params.len()
    );

    data
}
