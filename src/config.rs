use anyhow::{Context, Result};
use roomscene_ui3d::LayoutDescriptor;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_LAYOUT_PATH: &str = "config/layout.toml";

/// Scene-level layout configuration: every container to lay out.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SceneLayoutConfig {
    /// Emit debug boxes for every container.
    pub debug: bool,
    pub containers: Vec<ContainerConfig>,
}

/// One layout container placed in the scene.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ContainerConfig {
    pub name: String,
    /// World position of the container center.
    pub position: [f32; 3],
    /// Emit debug boxes for this container only.
    pub debug: bool,
    pub layout: LayoutDescriptor,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            name: "container".to_string(),
            position: [0.0, 0.0, 0.0],
            debug: false,
            layout: LayoutDescriptor::default(),
        }
    }
}

impl SceneLayoutConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SceneLayoutConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SceneLayoutConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Layout config not found at {}. Using defaults",
                        path.display()
                    );
                }
                SceneLayoutConfig::default()
            }
        }
    }

    /// Load configuration from `path`, returning errors to the caller.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse layout config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
