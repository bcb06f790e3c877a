//! TOML settings file.
//!
//! ```toml
//! name = "lithophane"
//!
//! [preprocess]
//! max_dim = 400
//! invert = true
//!
//! [relief]
//! z_scale = 3.0
//! base_thickness = 0.8
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hueforge::ReliefParams;
use serde::{Deserialize, Serialize};

use crate::heightmap::PreprocessOptions;

/// Settings read from `--config`; missing keys take built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub name: Option<String>,
    pub preprocess: PreprocessOptions,
    pub relief: ReliefParams,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = Config::from_toml(
            r#"
name = "lithophane"

[preprocess]
max_dim = 400
invert = true

[relief]
z_scale = 3.0
base_thickness = 0.8
"#,
        )
        .unwrap();
        assert_eq!(cfg.name.as_deref(), Some("lithophane"));
        assert_eq!(cfg.preprocess.max_dim, 400);
        assert!(cfg.preprocess.invert);
        assert_eq!(cfg.preprocess.contrast, 1.0);
        assert_eq!(cfg.relief.z_scale, 3.0);
        assert_eq!(cfg.relief.base_thickness, 0.8);
        assert_eq!(cfg.relief.scale_xy, 0.5);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("scale = 2.0").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hueforge.toml");
        fs::write(&path, "[relief]\nscale_xy = 0.25\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.relief.scale_xy, 0.25);

        assert!(Config::load(&dir.path().join("missing.toml")).is_err());
    }
}
