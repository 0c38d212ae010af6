//! Settings of the demo: dashboard behavior and the backend it runs against.

use crate::Cli;
use mas_dashboard::DashboardConfig;
use mas_memory::config::MemoryConfig;
use serde::{Deserialize, Serialize};

/// Everything the demo can be configured with, one section per crate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// `[dashboard]`: staleness threshold and submission query
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// `[memory]`: fixture to seed the backend from and the optimizer batch size
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl AppConfig {
    /// Resolve the settings for `cli`.
    ///
    /// Built-in defaults are overridden by the TOML file passed with `--config`, which
    /// is in turn overridden by `APP_<SECTION>__<KEY>` variables, e.g.
    /// `APP_MEMORY__FIXTURE_PATH=masdemo/fixture.json` or
    /// `APP_DASHBOARD__STALENESS_THRESHOLD=5`.
    ///
    /// A `--config` path that does not exist is an error rather than being skipped.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = &cli.config {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            builder = builder.add_source(config::File::from(path.as_path()));
        }

        builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}
