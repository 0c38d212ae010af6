//! Configuration types for the in-memory backend.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the in-memory backend.
///
/// # Examples
///
/// ```
/// use mas_memory::config::MemoryConfig;
/// use std::path::PathBuf;
///
/// // Empty backend (default)
/// let config = MemoryConfig::default();
///
/// // Seeded from a fixture
/// let config = MemoryConfig {
///     fixture_path: Some(PathBuf::from("fixture.json")),
///     optimal_batch_size: 5,
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// JSON fixture to seed the backend with. If None, the backend starts empty
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Maximum number of ids the optimizer proposes at once
    #[serde(default = "default_optimal_batch_size")]
    pub optimal_batch_size: usize,
}

fn default_optimal_batch_size() -> usize {
    10
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            optimal_batch_size: default_optimal_batch_size(),
        }
    }
}
