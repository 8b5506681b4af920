//! `[build]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory (relative to project root).
    pub output: PathBuf,
    /// Episode manifest, JSON or TOML (relative to project root).
    pub items: PathBuf,
    /// Indent the generated XML.
    pub pretty: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "output".into(),
            items: "episodes.json".into(),
            pretty: true,
        }
    }
}
