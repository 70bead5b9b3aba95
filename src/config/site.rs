//! Blog configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub title: String,
    pub description: String,
    pub author: String,

    /// Directory holding `<slug>.md` files, relative to the base directory
    pub posts_dir: String,

    /// Moment-style date format used when printing listings
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),
            posts_dir: "posts".to_string(),
            date_format: "YYYY-MM-DD".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: BlogConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}
