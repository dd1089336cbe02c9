//! Canonical view paths for every console entity.
//!
//! [`ViewPaths`] builds the hyperlink targets view code hands to the
//! router: one builder per entity type, each composing the hierarchical URL
//! from identifier arguments. Identifiers are free-form (node names contain
//! spaces, application ids contain slashes), so every user-supplied segment
//! goes through [`double_encode`](ViewPaths::double_encode): the browser
//! pre-decodes one percent-encoding level before application code sees the
//! URL, and encoding twice is what makes one decode land on the intended
//! single-encoded form.
//!
//! The second pass can be suppressed through an instance-wide
//! single-encode flag. It is off by default and only ever forced
//! temporarily by [`navigate`](ViewPaths::navigate) around its producer
//! callback — paths handed straight to the router must not carry the
//! second, address-bar-compensating pass.
//!
//! # Example
//!
//! ```
//! use console_navigator::ViewPaths;
//!
//! let paths = ViewPaths::new();
//! assert_eq!(paths.node_view_path("seed 1"), "/node/seed%25201");
//! ```

use crate::error::NavigationResult;
use crate::router::ConsoleRouter;
use crate::trace_log;
use std::cell::Cell;

/// Builder for the console's canonical view paths.
///
/// Holds the single-encode flag as interior-mutable state so the builders
/// can stay `&self` — they are called from view code that only ever holds a
/// shared reference. Single-threaded by construction (`Cell`), like the
/// rest of the navigation layer.
#[derive(Debug, Default)]
pub struct ViewPaths {
    force_single_encode: Cell<bool>,
}

/// Restores the single-encode flag when dropped, unwinding included.
struct EncodeGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> EncodeGuard<'a> {
    fn force_single(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for EncodeGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

impl ViewPaths {
    /// Create a builder with double-encoding active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Percent-encode an identifier for use as a path segment.
    ///
    /// Encodes twice unless the single-encode flag is engaged: the address
    /// bar decodes one level before the application observes the URL, so
    /// only the inner encoding survives to the router.
    ///
    /// # Example
    ///
    /// ```
    /// use console_navigator::ViewPaths;
    ///
    /// let paths = ViewPaths::new();
    /// assert_eq!(paths.double_encode("a b"), "a%2520b");
    /// ```
    pub fn double_encode(&self, value: &str) -> String {
        let once = urlencoding::encode(value).into_owned();
        if self.force_single_encode.get() {
            once
        } else {
            urlencoding::encode(&once).into_owned()
        }
    }

    /// Produce a path with single-encoding forced, then navigate to it.
    ///
    /// The flag is restored as soon as the producer returns — or unwinds —
    /// so the temporary mode can never leak into later builder calls.
    pub fn navigate<F>(&self, router: &mut ConsoleRouter, produce: F) -> NavigationResult
    where
        F: FnOnce(&ViewPaths) -> String,
    {
        let path = {
            let _single = EncodeGuard::force_single(&self.force_single_encode);
            produce(self)
        };
        trace_log!("navigate helper produced '{}'", path);
        router.push(&path)
    }

    // ========================================================================
    // Cluster-level views
    // ========================================================================

    /// The cluster dashboard.
    pub fn cluster_view_path(&self) -> String {
        "/".to_string()
    }

    /// The node list.
    pub fn nodes_view_path(&self) -> String {
        "/nodes".to_string()
    }

    /// The system application list.
    pub fn system_apps_view_path(&self) -> String {
        "/system/apps".to_string()
    }

    /// The application list.
    pub fn apps_view_path(&self) -> String {
        "/apps".to_string()
    }

    /// The application type list.
    pub fn app_types_view_path(&self) -> String {
        "/appTypes".to_string()
    }

    /// The network list.
    pub fn networks_view_path(&self) -> String {
        "/networks".to_string()
    }

    // ========================================================================
    // Entity views
    // ========================================================================

    /// A single node.
    pub fn node_view_path(&self, node_name: &str) -> String {
        format!("/node/{}", self.double_encode(node_name))
    }

    /// A single network.
    pub fn network_view_path(&self, network_name: &str) -> String {
        format!("/network/{}", self.double_encode(network_name))
    }

    /// An application type.
    pub fn app_type_view_path(&self, app_type_name: &str) -> String {
        format!("/apptype/{}", self.double_encode(app_type_name))
    }

    /// An application instance.
    pub fn app_view_path(&self, app_type_name: &str, app_id: &str) -> String {
        format!(
            "/apptype/{}/app/{}",
            self.double_encode(app_type_name),
            self.double_encode(app_id)
        )
    }

    /// A service of an application.
    pub fn service_view_path(&self, app_type_name: &str, app_id: &str, service_id: &str) -> String {
        format!(
            "{}/service/{}",
            self.app_view_path(app_type_name, app_id),
            self.double_encode(service_id)
        )
    }

    /// A partition of a service.
    pub fn partition_view_path(
        &self,
        app_type_name: &str,
        app_id: &str,
        service_id: &str,
        partition_id: &str,
    ) -> String {
        format!(
            "{}/partition/{}",
            self.service_view_path(app_type_name, app_id, service_id),
            self.double_encode(partition_id)
        )
    }

    /// A replica of a partition.
    pub fn replica_view_path(
        &self,
        app_type_name: &str,
        app_id: &str,
        service_id: &str,
        partition_id: &str,
        replica_id: &str,
    ) -> String {
        format!(
            "{}/replica/{}",
            self.partition_view_path(app_type_name, app_id, service_id, partition_id),
            self.double_encode(replica_id)
        )
    }

    // ========================================================================
    // Deployed (per-node) views
    // ========================================================================

    /// An application as deployed on a specific node.
    pub fn deployed_app_view_path(&self, node_name: &str, app_id: &str) -> String {
        format!(
            "/node/{}/deployedapp/{}",
            self.double_encode(node_name),
            self.double_encode(app_id)
        )
    }

    /// A service package as deployed on a specific node.
    ///
    /// The activation id segment only appears for exclusively-activated
    /// packages; shared activations have no id and an empty one is treated
    /// the same as none.
    pub fn deployed_service_view_path(
        &self,
        node_name: &str,
        app_id: &str,
        service_id: &str,
        activation_id: Option<&str>,
    ) -> String {
        let mut path = format!(
            "{}/deployedservice/{}",
            self.deployed_app_view_path(node_name, app_id),
            self.double_encode(service_id)
        );
        if let Some(id) = activation_id.filter(|id| !id.is_empty()) {
            path.push_str("/activationid/");
            path.push_str(&self.double_encode(id));
        }
        path
    }

    /// The replica list of a deployed service package.
    pub fn deployed_replicas_view_path(
        &self,
        node_name: &str,
        app_id: &str,
        service_id: &str,
        activation_id: Option<&str>,
    ) -> String {
        format!(
            "{}/replicas/",
            self.deployed_service_view_path(node_name, app_id, service_id, activation_id)
        )
    }

    /// The code package list of a deployed service package.
    pub fn deployed_code_packages_view_path(
        &self,
        node_name: &str,
        app_id: &str,
        service_id: &str,
        activation_id: Option<&str>,
    ) -> String {
        format!(
            "{}/codepackages/",
            self.deployed_service_view_path(node_name, app_id, service_id, activation_id)
        )
    }

    /// A single code package of a deployed service package.
    pub fn code_package_view_path(
        &self,
        node_name: &str,
        app_id: &str,
        service_id: &str,
        activation_id: Option<&str>,
        code_package_name: &str,
    ) -> String {
        format!(
            "{}/codepackage/{}",
            self.deployed_service_view_path(node_name, app_id, service_id, activation_id),
            self.double_encode(code_package_name)
        )
    }

    /// A replica of a deployed service package.
    ///
    /// Node, application, service, and partition together identify the
    /// replica; the replica id alone does not, but it stays in the path
    /// because the view displays it.
    pub fn deployed_replica_view_path(
        &self,
        node_name: &str,
        app_id: &str,
        service_id: &str,
        activation_id: Option<&str>,
        partition_id: &str,
        replica_id: &str,
    ) -> String {
        format!(
            "{}/partition/{}/replica/{}",
            self.deployed_service_view_path(node_name, app_id, service_id, activation_id),
            self.double_encode(partition_id),
            self.double_encode(replica_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    #[test]
    fn test_double_encode_default_is_double() {
        let paths = ViewPaths::new();
        // encode("a b") = "a%20b", encode("a%20b") = "a%2520b"
        assert_eq!(paths.double_encode("a b"), "a%2520b");
    }

    #[test]
    fn test_double_encode_forced_single() {
        let paths = ViewPaths::new();
        let _single = EncodeGuard::force_single(&paths.force_single_encode);
        assert_eq!(paths.double_encode("a b"), "a%20b");
    }

    #[test]
    fn test_static_list_paths() {
        let paths = ViewPaths::new();
        assert_eq!(paths.cluster_view_path(), "/");
        assert_eq!(paths.nodes_view_path(), "/nodes");
        assert_eq!(paths.system_apps_view_path(), "/system/apps");
        assert_eq!(paths.apps_view_path(), "/apps");
        assert_eq!(paths.app_types_view_path(), "/appTypes");
        assert_eq!(paths.networks_view_path(), "/networks");
    }

    #[test]
    fn test_entity_paths_encode_identifiers() {
        let paths = ViewPaths::new();
        assert_eq!(paths.node_view_path("seed 1"), "/node/seed%25201");
        assert_eq!(paths.network_view_path("net"), "/network/net");
        assert_eq!(
            paths.app_view_path("VisualObjectsType", "fabric:/VisualObjects"),
            "/apptype/VisualObjectsType/app/fabric%253A%252FVisualObjects"
        );
    }

    #[test]
    fn test_distinct_identifiers_never_collapse() {
        let paths = ViewPaths::new();
        // A slash inside an identifier encodes, so it cannot be mistaken
        // for a path separator.
        assert_ne!(paths.node_view_path("x/y"), paths.node_view_path("x"));
        assert_ne!(
            paths.node_view_path("x/y"),
            format!("{}/y", paths.node_view_path("x"))
        );
    }

    #[test]
    fn test_replica_path_nests_through_partition() {
        let paths = ViewPaths::new();
        assert_eq!(
            paths.replica_view_path("T", "A", "S", "P", "R"),
            "/apptype/T/app/A/service/S/partition/P/replica/R"
        );
    }

    #[test]
    fn test_deployed_service_activation_id_variants() {
        let paths = ViewPaths::new();
        let without = paths.deployed_service_view_path("n", "a", "s", None);
        assert_eq!(without, "/node/n/deployedapp/a/deployedservice/s");

        // Empty ids behave like missing ones.
        assert_eq!(
            paths.deployed_service_view_path("n", "a", "s", Some("")),
            without
        );

        assert_eq!(
            paths.deployed_service_view_path("n", "a", "s", Some("act-1")),
            "/node/n/deployedapp/a/deployedservice/s/activationid/act-1"
        );
    }

    #[test]
    fn test_deployed_collection_paths() {
        let paths = ViewPaths::new();
        assert_eq!(
            paths.deployed_replicas_view_path("n", "a", "s", None),
            "/node/n/deployedapp/a/deployedservice/s/replicas/"
        );
        assert_eq!(
            paths.deployed_code_packages_view_path("n", "a", "s", Some("act-1")),
            "/node/n/deployedapp/a/deployedservice/s/activationid/act-1/codepackages/"
        );
        assert_eq!(
            paths.code_package_view_path("n", "a", "s", None, "Code"),
            "/node/n/deployedapp/a/deployedservice/s/codepackage/Code"
        );
        assert_eq!(
            paths.deployed_replica_view_path("n", "a", "s", None, "p-1", "r-1"),
            "/node/n/deployedapp/a/deployedservice/s/partition/p-1/replica/r-1"
        );
    }

    #[test]
    fn test_navigate_forces_single_encoding_and_restores() {
        let mut router = ConsoleRouter::new();
        router.add_route(Route::new("node/:name").view("node"));

        let paths = ViewPaths::new();
        let result = paths.navigate(&mut router, |p| p.node_view_path("seed 1"));

        assert!(result.is_success());
        // Single-encoded inside the producer...
        assert_eq!(router.current_path(), "/node/seed%201");
        // ...and back to double-encoding afterwards.
        assert_eq!(paths.double_encode("a b"), "a%2520b");
    }

    #[test]
    fn test_navigate_restores_after_panic() {
        let paths = ViewPaths::new();
        let mut router = ConsoleRouter::new();

        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            paths.navigate(&mut router, |_| panic!("producer failed"));
        }));

        assert!(caught.is_err());
        assert_eq!(paths.double_encode("a b"), "a%2520b");
    }

    #[test]
    fn test_builders_are_deterministic() {
        let paths = ViewPaths::new();
        assert_eq!(
            paths.node_view_path("seed 1"),
            paths.node_view_path("seed 1")
        );
    }
}
