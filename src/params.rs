//! Route parameter maps.
//!
//! [`RouteParams`] holds the parameters bound from dynamic path segments
//! (e.g. `:name` in `/node/:name`) for one navigation. Besides the usual
//! typed access and parent-child merging, it provides
//! [`same_value_set`](RouteParams::same_value_set) — the comparison the
//! redirect reconciler uses to decide whether two navigations landed on the
//! same entity.
//!
//! # Example
//!
//! ```
//! use console_navigator::RouteParams;
//!
//! // Parameters from /node/seed-1
//! let mut params = RouteParams::new();
//! params.insert("name".to_string(), "seed-1".to_string());
//! assert_eq!(params.get("name"), Some(&"seed-1".to_string()));
//! ```

use std::collections::HashMap;

/// Route parameters extracted from path segments
///
/// # Example
///
/// ```
/// use console_navigator::RouteParams;
///
/// // Route pattern: /node/:name
/// // Matched path: /node/seed-1
/// let mut params = RouteParams::new();
/// params.insert("name".to_string(), "seed-1".to_string());
///
/// assert_eq!(params.get("name"), Some(&"seed-1".to_string()));
/// assert_eq!(params.get_as::<String>("name"), Some("seed-1".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Get a reference to the underlying parameter map.
    pub fn all(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Iterate over the parameter values, keys discarded.
    pub fn values(&self) -> impl Iterator<Item = &String> {
        self.params.values()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Merge parent parameters with child parameters
    ///
    /// Child parameters override parent parameters in case of collision.
    /// This is used for nested routing to inherit parent route parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use console_navigator::RouteParams;
    ///
    /// let mut parent = RouteParams::new();
    /// parent.insert("name".to_string(), "seed-1".to_string());
    ///
    /// let mut child = RouteParams::new();
    /// child.insert("appId".to_string(), "fabric-app".to_string());
    ///
    /// let merged = RouteParams::merge(&parent, &child);
    /// assert_eq!(merged.get("name"), Some(&"seed-1".to_string()));
    /// assert_eq!(merged.get("appId"), Some(&"fabric-app".to_string()));
    /// ```
    pub fn merge(parent: &RouteParams, child: &RouteParams) -> RouteParams {
        let mut merged = parent.clone();

        // Child params override parent params
        for (key, value) in child.iter() {
            merged.insert(key.clone(), value.clone());
        }

        merged
    }

    /// Compare two parameter maps by their value sets.
    ///
    /// Two maps are considered equal when they have the same number of
    /// entries and every value in `self` appears somewhere among the values
    /// of `other`. Keys play no part, and duplicate values are not counted
    /// — so `{a: "x", b: "y"}` and `{c: "y", d: "x"}` compare equal, and so
    /// do `{a: "x", b: "x"}` and `{c: "x", d: "y"}`. This is deliberately
    /// weaker than key-paired equality: it reproduces the comparison the
    /// deployed console performs when deciding whether two navigations
    /// landed on the same entity, false positives included. Tightening it
    /// would change which navigations trigger a restore redirect.
    ///
    /// # Example
    ///
    /// ```
    /// use console_navigator::RouteParams;
    ///
    /// let mut a = RouteParams::new();
    /// a.insert("name".to_string(), "seed-1".to_string());
    ///
    /// let mut b = RouteParams::new();
    /// b.insert("nodeName".to_string(), "seed-1".to_string());
    ///
    /// // Same value under a different key still counts as the same entity.
    /// assert!(a.same_value_set(&b));
    /// ```
    pub fn same_value_set(&self, other: &RouteParams) -> bool {
        self.len() == other.len()
            && self
                .values()
                .all(|value| other.values().any(|candidate| candidate == value))
    }
}

// ============================================================================
// Tests
// ============================================================================
