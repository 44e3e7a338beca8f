use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_CONFIG_FILE, DEFAULT_DATA_FILE, DEFAULT_PREVIEW_ROWS, ENV_PREFIX,
};
use config::{Config, Environment, File, Source};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dashboard settings: defaults, then an optional TOML file, then
/// `BIKE_DASHBOARD_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub preview_rows: usize,
    pub bar_width: usize,
}

impl DashboardConfig {
    /// Load settings. An explicit `path` must exist; the default config file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        Self::build(file, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn build<S>(file: S, env: Environment) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("data_path", DEFAULT_DATA_FILE)?
            .set_default("preview_rows", DEFAULT_PREVIEW_ROWS as u64)?
            .set_default("bar_width", DEFAULT_BAR_WIDTH as u64)?
            .add_source(file)
            .add_source(env)
            .build()?;

        let config: DashboardConfig = settings.try_deserialize()?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}
