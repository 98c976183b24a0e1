// Resource loading
//
// Levels and configuration are plain data files resolved against a base
// directory. Everything else the host engine would load (meshes, textures,
// sounds) stays on the host side.

mod level;
mod loader;

pub use level::Level;
pub use loader::{ResourceKind, ResourceLoader, SceneLoader};

/// Resource loading errors
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::NotFound("levels/void.toml".to_string());
        assert_eq!(err.to_string(), "Resource not found: levels/void.toml");
    }
}
