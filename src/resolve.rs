//! URL resolution against the route registry.
//!
//! [`resolve_snapshot`] turns a navigated URL into the [`RouteSnapshot`]
//! chain the reconciler consumes. Resolution happens once per navigation:
//!
//! 1. Normalize the path and split it into segments.
//! 2. Walk the registry: literal segments match exactly, `:name` segments
//!    bind parameters, with backtracking when a partial match dead-ends.
//! 3. When all segments are consumed at a route with children, descend into
//!    its index route (empty path first, then a child named `"index"`).
//! 4. Fold the matched levels into a snapshot chain, stamping every level
//!    with the navigation's merged parameter map.
//!
//! Given the registry
//!
//! ```text
//! node/:name      (view "node")
//!   ""            (index)
//!   details
//!   events
//! apps            (view "apps")
//! ```
//!
//! the path `/node/seed-1/details` resolves to the chain
//! `node/:name → details` with `{name: "seed-1"}` at both levels, and
//! `/node/seed-1` resolves to `node/:name → ""`.

use crate::params::RouteParams;
use crate::route::Route;
use crate::snapshot::RouteSnapshot;
use crate::{debug_log, warn_log};
use std::borrow::Cow;
use std::sync::Arc;

/// Maximum nesting depth to prevent runaway recursion on cyclic registries.
const MAX_DEPTH: usize = 16;

/// Normalize a path for consistent comparison
///
/// Ensures paths have a leading slash and no trailing slash (unless root).
/// Returns `Cow<str>` to avoid allocation when path is already normalized.
///
/// # Examples
///
/// ```
/// use console_navigator::normalize_path;
///
/// assert_eq!(normalize_path("/nodes"), "/nodes");
/// assert_eq!(normalize_path("nodes"), "/nodes");
/// assert_eq!(normalize_path("/nodes/"), "/nodes");
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &'_ str) -> Cow<'_, str> {
    if path.is_empty() {
        return Cow::Borrowed("/");
    }

    if path == "/" {
        return Cow::Borrowed(path);
    }

    let has_leading = path.starts_with('/');
    let has_trailing = path.ends_with('/');

    if has_leading && !has_trailing {
        return Cow::Borrowed(path);
    }

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}

/// Split a path into segments, filtering empty segments
///
/// # Examples
///
/// ```
/// use console_navigator::split_path;
///
/// assert_eq!(split_path("/node/seed-1"), vec!["node", "seed-1"]);
/// assert_eq!(split_path("/"), Vec::<&str>::new());
/// assert_eq!(split_path("/nodes/"), vec!["nodes"]);
/// ```
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve a URL path against the registry into a snapshot chain.
///
/// Returns `None` when nothing matches. On success every level of the
/// returned chain carries the navigation's complete merged parameter map,
/// so any suffix of the chain identifies the entity being viewed.
pub fn resolve_snapshot(routes: &[Arc<Route>], path: &str) -> Option<RouteSnapshot> {
    let normalized = normalize_path(path);
    let segments = split_path(&normalized);

    let mut chain: Vec<(Arc<Route>, RouteParams)> = Vec::new();
    if !resolve_recursive(routes, &segments, 0, &RouteParams::new(), &mut chain) {
        return None;
    }

    // Deepest entry has inherited every ancestor binding.
    let merged = chain
        .last()
        .map(|(_, params)| params.clone())
        .unwrap_or_default();

    let mut snapshot: Option<RouteSnapshot> = None;
    for (route, _) in chain.iter().rev() {
        let mut node = RouteSnapshot::new(
            route.config.path.clone(),
            route.config.view.clone(),
            merged.clone(),
        );
        node.first_child = snapshot.take().map(Box::new);
        snapshot = Some(node);
    }

    debug_log!(
        "resolved '{}' → {} levels: [{}]",
        path,
        chain.len(),
        chain
            .iter()
            .map(|(route, _)| format!("\"{}\"", route.config.path))
            .collect::<Vec<_>>()
            .join(" → ")
    );

    snapshot
}

/// Recursive registry walk with backtracking.
///
/// Returns `true` once a complete match is found: all path segments
/// consumed at a leaf, or at a route whose index child absorbs the rest.
fn resolve_recursive(
    routes: &[Arc<Route>],
    remaining: &[&str],
    depth: usize,
    inherited_params: &RouteParams,
    chain: &mut Vec<(Arc<Route>, RouteParams)>,
) -> bool {
    if depth >= MAX_DEPTH {
        warn_log!(
            "maximum route nesting depth ({}) exceeded, check for circular routes",
            MAX_DEPTH
        );
        return false;
    }

    for route in routes {
        let route_path = route.config.path.trim_matches('/');
        let route_segments = split_path(route_path);

        // Empty-path route: index leaf or layout wrapper.
        if route_segments.is_empty() {
            let params = inherited_params.clone();

            if remaining.is_empty() {
                chain.push((Arc::clone(route), params.clone()));
                if !route.children.is_empty() {
                    push_index_route(&route.children, &params, chain);
                }
                return true;
            }

            // Segments remain: only a layout route with children can absorb them.
            if !route.children.is_empty() {
                chain.push((Arc::clone(route), params.clone()));
                if resolve_recursive(&route.children, remaining, depth + 1, &params, chain) {
                    return true;
                }
                chain.pop();
            }

            continue;
        }

        if route_segments.len() > remaining.len() {
            continue;
        }

        let mut params = inherited_params.clone();
        let mut matched = true;

        for (i, route_seg) in route_segments.iter().enumerate() {
            if let Some(name) = route_seg.strip_prefix(':') {
                params.insert(name.to_string(), remaining[i].to_string());
            } else if *route_seg != remaining[i] {
                matched = false;
                break;
            }
        }

        if !matched {
            continue;
        }

        let after = &remaining[route_segments.len()..];
        chain.push((Arc::clone(route), params.clone()));

        if after.is_empty() {
            if !route.children.is_empty() {
                push_index_route(&route.children, &params, chain);
            }
            return true;
        }

        if !route.children.is_empty()
            && resolve_recursive(&route.children, after, depth + 1, &params, chain)
        {
            return true;
        }

        // Children didn't absorb the remainder — backtrack.
        chain.pop();
    }

    false
}

/// Push the index child when all segments are consumed at a parent route.
///
/// Priority: a child with an empty path, then a child literally named
/// `"index"`. Index routes may themselves declare index children.
fn push_index_route(
    children: &[Arc<Route>],
    params: &RouteParams,
    chain: &mut Vec<(Arc<Route>, RouteParams)>,
) {
    for child in children {
        if child.config.path.trim_matches('/').is_empty() {
            chain.push((Arc::clone(child), params.clone()));
            if !child.children.is_empty() {
                push_index_route(&child.children, params, chain);
            }
            return;
        }
    }

    for child in children {
        if child.config.path.trim_matches('/') == "index" {
            chain.push((Arc::clone(child), params.clone()));
            return;
        }
    }
}
