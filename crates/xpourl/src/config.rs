//! # Configuration
//!
//! Configuration is loaded with [`confique`], layering environment
//! variables, TOML files and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `XPOURL_BASE_URL`, `XPOURL_TRUE_TOKEN`, `XPOURL_FALSE_TOKEN`.
//! 2. **Explicit file**: the path given with `--config`, if any.
//! 3. **Global file**: `xpourl.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `base_url` | `http://localhost/xpo/api/render` | Render API endpoint |
//! | `true_token` | `1` | How `true` is written in URLs |
//! | `false_token` | `0` | How `false` is written in URLs |

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::format::FormatPolicy;

pub const CONFIG_FILE_NAME: &str = "xpourl.toml";

const DEFAULT_BASE_URL: &str = "http://localhost/xpo/api/render";

/// Configuration for xpourl, stored in `xpourl.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct XpoConfig {
    /// Render API endpoint that generated URLs start with
    #[config(env = "XPOURL_BASE_URL", default = "http://localhost/xpo/api/render")]
    pub base_url: String,

    /// Token written for boolean `true`
    #[config(env = "XPOURL_TRUE_TOKEN", default = "1")]
    pub true_token: String,

    /// Token written for boolean `false`
    #[config(env = "XPOURL_FALSE_TOKEN", default = "0")]
    pub false_token: String,
}

impl Default for XpoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            true_token: "1".to_string(),
            false_token: "0".to_string(),
        }
    }
}

impl XpoConfig {
    /// Load configuration, with `explicit` taking priority over the global file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            builder = builder.file(path);
        }
        if let Some(path) = global_config_path() {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// The formatting policy URLs are built with.
    pub fn format_policy(&self) -> FormatPolicy {
        FormatPolicy::with_bool_tokens(self.true_token.clone(), self.false_token.clone())
    }
}

/// Location of the global `xpourl.toml`, if the platform has a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "xpourl").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
