// Resource loading functionality

use super::{Level, ResourceError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Supported resource types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Level,
    Config,
}

impl ResourceKind {
    /// Get the default directory for this resource type
    pub fn default_directory(&self) -> &'static str {
        match self {
            ResourceKind::Level => "levels",
            ResourceKind::Config => "config",
        }
    }
}

/// Instantiates levels by resource path
pub trait SceneLoader {
    fn load_level(&self, path: &str) -> Result<Level, ResourceError>;
}

/// Resource loader responsible for finding and parsing data files
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    base_path: PathBuf,
}

impl ResourceLoader {
    /// Create a new resource loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a resource.
    ///
    /// Names already carrying the kind's directory (`levels/yard.toml`) are
    /// not prefixed a second time.
    pub fn resolve_path(&self, kind: ResourceKind, name: &str) -> PathBuf {
        let dir = kind.default_directory();
        let name = name.trim_start_matches("res://");
        if Path::new(name).starts_with(dir) {
            self.base_path.join(name)
        } else {
            self.base_path.join(dir).join(name)
        }
    }

    /// Check if a resource exists
    pub fn exists(&self, kind: ResourceKind, name: &str) -> bool {
        self.resolve_path(kind, name).is_file()
    }

    /// Load a resource as text
    pub fn load_text(&self, kind: ResourceKind, name: &str) -> Result<String, ResourceError> {
        let path = self.resolve_path(kind, name);

        if !path.is_file() {
            return Err(ResourceError::NotFound(path.to_string_lossy().to_string()));
        }

        Ok(std::fs::read_to_string(&path)?)
    }

    /// Load and deserialize a TOML resource
    pub fn load_toml<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<T, ResourceError> {
        let text = self.load_text(kind, name)?;
        toml::from_str(&text).map_err(|e| ResourceError::Parse {
            path: name.to_string(),
            message: e.to_string(),
        })
    }

}

impl SceneLoader for ResourceLoader {
    fn load_level(&self, path: &str) -> Result<Level, ResourceError> {
        let level: Level = self.load_toml(ResourceKind::Level, path)?;
        log::info!(
            "Loaded level '{}' with {} markers",
            level.name,
            level.markers.len()
        );
        Ok(level)
    }
}
