//! Configuration of the dashboard workflow.

use serde::{Deserialize, Serialize};

/// Tunables of the dashboard workflow.
///
/// # Examples
///
/// ```
/// use mas_dashboard::DashboardConfig;
///
/// // Use default configuration
/// let config = DashboardConfig::default();
/// assert_eq!(config.staleness_threshold, 3);
///
/// // Refetch the optimal set whenever fewer than five ids are remembered
/// let config = DashboardConfig {
///     staleness_threshold: 5,
///     submitted_only: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// The remembered optimal set is refetched when it holds fewer ids than this
    #[serde(default = "default_staleness_threshold")]
    pub staleness_threshold: usize,

    /// Ask the repository to leave out unsubmitted work
    #[serde(default = "default_true")]
    pub submitted_only: bool,
}

fn default_staleness_threshold() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            staleness_threshold: default_staleness_threshold(),
            submitted_only: default_true(),
        }
    }
}
