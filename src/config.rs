use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

fn default_include_bundled() -> bool {
    true
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory of extra collection files, searched recursively.
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    #[serde(default = "default_include_bundled")]
    pub include_bundled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: None,
            include_bundled: default_include_bundled(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&config_str)?;

        Ok(config)
    }
}
