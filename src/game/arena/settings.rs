// Arena round settings
//
// Read from `config/arena.toml` under the data root, then overridden by
// ARENA_* environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::engine::resources::{ResourceKind, ResourceLoader};

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "arena.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    /// Round length in minutes
    pub duration: f32,
    /// Number of AI opponents
    pub bots: u32,
    /// Seed the floor with ammo and health packs
    pub use_powerups: bool,
    /// Hand every actor a rifle and ammo on spawn
    pub use_kits: bool,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            duration: 5.0,
            bots: 3,
            use_powerups: true,
            use_kits: true,
        }
    }
}

impl ArenaSettings {
    /// Round length in seconds
    pub fn round_seconds(&self) -> f32 {
        self.duration * 60.0
    }

    /// Settings from the loader's config directory, or defaults when the
    /// file is absent. Env overrides apply either way.
    pub fn load_from(loader: &ResourceLoader) -> Result<Self> {
        let mut cfg = if loader.exists(ResourceKind::Config, SETTINGS_FILE) {
            loader
                .load_toml::<Self>(ResourceKind::Config, SETTINGS_FILE)
                .context("load arena settings")?
        } else {
            log::info!("No {} found, using default arena settings", SETTINGS_FILE);
            Self::default()
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(d) = env_parse("ARENA_DURATION") {
            self.duration = d;
        }
        if let Some(b) = env_parse("ARENA_BOTS") {
            self.bots = b;
        }
        if let Some(p) = env_parse("ARENA_POWERUPS") {
            self.use_powerups = p;
        }
        if let Some(k) = env_parse("ARENA_KITS") {
            self.use_kits = k;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Directory holding levels and config, next to the manifest
pub fn data_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg: ArenaSettings = toml::from_str("bots = 7\nuse_kits = false").unwrap();
        assert_eq!(cfg.bots, 7);
        assert!(!cfg.use_kits);
        assert_eq!(cfg.duration, 5.0);
        assert!(cfg.use_powerups);
    }

    #[test]
    fn test_round_seconds() {
        let cfg = ArenaSettings {
            duration: 1.5,
            ..Default::default()
        };
        assert_eq!(cfg.round_seconds(), 90.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loader = ResourceLoader::new("/definitely/not/here");
        let cfg = ArenaSettings::load_from(&loader).unwrap();
        assert_eq!(cfg.round_seconds(), cfg.duration * 60.0);
        assert!(!loader.exists(ResourceKind::Config, SETTINGS_FILE));
    }

    #[test]
    fn test_broken_file_errors_with_name() {
        let dir = std::env::temp_dir().join(format!("arena-settings-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("config")).unwrap();
        std::fs::write(dir.join("config").join(SETTINGS_FILE), "bots = \"many\"").unwrap();

        let err = ArenaSettings::load_from(&ResourceLoader::new(&dir)).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.starts_with("load arena settings"), "{chain}");
        assert!(chain.contains(SETTINGS_FILE), "{chain}");

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_bundled_settings_parse() {
        let cfg = ArenaSettings::load_from(&ResourceLoader::new(data_root())).unwrap();
        assert!(cfg.duration > 0.0);
    }
}
