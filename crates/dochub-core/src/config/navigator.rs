//! Navigator behavior configuration.

use serde::{Deserialize, Serialize};

/// Configuration for breadcrumb walks and subtree warming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Maximum number of parent hops when building a breadcrumb path.
    ///
    /// The backend does not guarantee the parent graph is acyclic, so the
    /// walk is capped and the resulting path flagged incomplete if the cap
    /// is hit.
    #[serde(default = "default_max_breadcrumb_depth")]
    pub max_breadcrumb_depth: usize,
    /// Maximum recursion depth when warming the subfolder cache.
    #[serde(default = "default_warm_depth")]
    pub warm_depth: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            max_breadcrumb_depth: default_max_breadcrumb_depth(),
            warm_depth: default_warm_depth(),
        }
    }
}

fn default_max_breadcrumb_depth() -> usize {
    32
}

fn default_warm_depth() -> usize {
    5
}
