//! Configuration model loaded from external sources.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DEFAULT_PAGE_SIZE;

fn default_page_size() -> NonZeroUsize {
    DEFAULT_PAGE_SIZE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the event replay tool.
pub struct PagerConfig {
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,
    /// Render input used when none is given on the command line.
    #[serde(default)]
    pub input_path: Option<PathBuf>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            input_path: None,
        }
    }
}

/// Layers `{dir}/default.yaml`, `{dir}/{app_env}.yaml` and `APP_*` variables.
#[cfg(feature = "cli")]
pub fn load_config(
    dir: &std::path::Path,
    app_env: &str,
) -> Result<PagerConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name(&dir.join("default").to_string_lossy()).required(false))
        .add_source(config::File::with_name(&dir.join(app_env).to_string_lossy()).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<PagerConfig>()
}
