//! # console-navigator
//!
//! Navigation layer for browser-style cluster management consoles:
//! tab-restoring redirect reconciliation, route resolution, and canonical
//! view-path construction.
//!
//! The crate grew out of one observation about how operators browse
//! clusters: they open an entity, pick a tab, then flip through siblings
//! expecting the tab to follow. [`RouteReconciler`] implements that memory
//! as a small observer of navigation lifecycle events; everything else —
//! registry, matcher, history, deferred redirect queue, path builders — is
//! the machinery required to host it.
//!
//! ## Quick start
//!
//! ```
//! use console_navigator::{ConsoleRouter, Route, ViewPaths};
//!
//! // Register the console's route tree.
//! let mut router = ConsoleRouter::new();
//! router.add_route(Route::new("node/:name").view("node").children(vec![
//!     Route::new(""),          // essentials (index)
//!     Route::new("details"),
//!     Route::new("events"),
//! ]));
//! router.add_route(Route::new("apps").view("apps"));
//!
//! // Operator opens a node's details tab, then flips to a sibling.
//! router.push("/node/seed-1/details");
//! router.push("/node/seed-2");
//! router.settle();
//! assert_eq!(router.current_path(), "/node/seed-2/details");
//!
//! // Leaving the category resets the memory.
//! router.push("/apps");
//! router.settle();
//! assert_eq!(router.current_path(), "/apps");
//!
//! // View code builds hyperlink targets through ViewPaths.
//! let paths = ViewPaths::new();
//! assert_eq!(paths.node_view_path("seed 1"), "/node/seed%25201");
//! ```
//!
//! ## Feature flags
//!
//! | Feature   | Default | Effect                                          |
//! |-----------|---------|-------------------------------------------------|
//! | `log`     | yes     | route diagnostics through the `log` crate       |
//! | `tracing` | no      | route diagnostics through `tracing` instead     |
//! | `cache`   | yes     | LRU cache of resolved routes (`lru` crate)      |
//!
//! `log` and `tracing` are mutually exclusive — enable at most one.

#[cfg(feature = "cache")]
pub mod cache;
pub mod error;
mod logging;
pub mod params;
pub mod paths;
pub mod reconciler;
pub mod resolve;
pub mod route;
pub mod router;
pub mod snapshot;
pub mod state;

#[cfg(feature = "cache")]
pub use cache::{CacheStats, ResolveCache};
pub use error::NavigationResult;
pub use params::RouteParams;
pub use paths::ViewPaths;
pub use reconciler::{PendingRedirect, RouteReconciler, RouterEvent};
pub use resolve::{normalize_path, resolve_snapshot, split_path};
pub use route::{Route, RouteConfig, ViewId};
pub use router::ConsoleRouter;
pub use snapshot::{path_data, PathData, RouteSnapshot};
pub use state::{NavigationDirection, RouteChangeEvent, RouterState};
