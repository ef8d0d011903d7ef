//! Viewer configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use surfacelab_core::{Error, FramingPolicy, Result};
use surfacelab_materials::{MaterialKind, DEFAULT_RESOLUTION};

/// Settings for a viewer session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Width and height of synthesized textures
    pub texture_resolution: u32,
    /// Preset applied to the first loaded model
    pub default_preset: MaterialKind,
    /// Key light intensity while the shadow slider is untouched
    pub key_light_intensity: f32,
    pub framing: FramingPolicy,
    /// Model registry: display name to mesh path
    pub models: BTreeMap<String, PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            texture_resolution: DEFAULT_RESOLUTION,
            default_preset: MaterialKind::Wood,
            key_light_intensity: 1.0,
            framing: FramingPolicy::default(),
            models: BTreeMap::new(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ViewerConfig =
            toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file. Relative model paths are taken relative to the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&contents).map_err(|e| match e {
            Error::Config(message) => Error::Config(format!("{}: {}", path.display(), message)),
            other => other,
        })?;

        if let Some(base) = path.parent() {
            for model_path in config.models.values_mut() {
                if model_path.is_relative() {
                    *model_path = base.join(&*model_path);
                }
            }
        }

        log::debug!("loaded config {} with {} models", path.display(), config.models.len());
        Ok(config)
    }

    /// Write the configuration as TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.texture_resolution == 0 {
            return Err(Error::Config("texture_resolution must be positive".to_string()));
        }
        if !self.key_light_intensity.is_finite() || self.key_light_intensity < 0.0 {
            return Err(Error::Config(
                "key_light_intensity must be a non-negative number".to_string(),
            ));
        }
        let f = &self.framing;
        if !(f.distance_factor.is_finite() && f.distance_factor > 0.0) {
            return Err(Error::Config("framing.distance_factor must be positive".to_string()));
        }
        if !f.elevation_factor.is_finite() {
            return Err(Error::Config("framing.elevation_factor must be finite".to_string()));
        }
        if !(f.min_camera_distance.is_finite() && f.min_camera_distance > 0.0) {
            return Err(Error::Config("framing.min_camera_distance must be positive".to_string()));
        }
        Ok(())
    }

    /// Register a model under `name`
    pub fn add_model<S: Into<String>, P: Into<PathBuf>>(&mut self, name: S, path: P) {
        self.models.insert(name.into(), path.into());
    }

    /// Path registered for `name`
    pub fn model_path(&self, name: &str) -> Result<&Path> {
        self.models
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"
texture_resolution = 128
default_preset = "glass"
key_light_intensity = 1.5

[framing]
distance_factor = 3.0

[models]
teapot = "assets/teapot.obj"
"#;

    #[test]
    fn test_parse_with_defaults() {
        let config = ViewerConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.texture_resolution, 128);
        assert_eq!(config.default_preset, MaterialKind::Glass);
        assert_relative_eq!(config.key_light_intensity, 1.5);
        assert_relative_eq!(config.framing.distance_factor, 3.0);
        assert_relative_eq!(config.framing.elevation_factor, -0.05);
        assert_eq!(config.model_path("teapot").unwrap(), Path::new("assets/teapot.obj"));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ViewerConfig::from_toml_str("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            ViewerConfig::from_toml_str("texture_resolution = 0"),
            Err(Error::Config(_))
        ));
        assert!(ViewerConfig::from_toml_str("[framing]\ndistance_factor = -1.0").is_err());
        assert!(ViewerConfig::from_toml_str("default_preset = \"stone\"").is_err());
    }

    #[test]
    fn test_unknown_model() {
        let config = ViewerConfig::default();
        assert!(matches!(config.model_path("bunny"), Err(Error::UnknownModel(_))));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = std::env::temp_dir().join("surfacelab_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("viewer.toml");

        let mut config = ViewerConfig::default();
        config.add_model("cube", "cube.obj");
        config.add_model("abs", std::env::temp_dir().join("abs.obj"));
        config.save(&path).unwrap();

        let loaded = ViewerConfig::load(&path).unwrap();
        assert_eq!(loaded.model_path("cube").unwrap(), dir.join("cube.obj"));
        assert_eq!(loaded.model_path("abs").unwrap(), std::env::temp_dir().join("abs.obj"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_error_names_file_once() {
        let path = std::env::temp_dir().join("surfacelab_config_invalid.toml");
        std::fs::write(&path, "texture_resolution = 0\n").unwrap();

        let err = ViewerConfig::load(&path).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::Config(_)));
        assert!(message.contains("surfacelab_config_invalid.toml"));
        assert!(message.contains("texture_resolution must be positive"));
        assert_eq!(message.matches("Configuration error").count(), 1);

        let _ = std::fs::remove_file(&path);
    }
}
