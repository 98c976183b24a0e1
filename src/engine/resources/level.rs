// Level data: terrain name plus tagged markers

use glam::Vec3;
use serde::Deserialize;

/// A tagged position inside a level (spawn points, props)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Marker {
    /// Group the marker belongs to, e.g. `PlayerSpawnPoint`
    pub group: String,
    /// Global position of the marker
    pub position: Vec3,
}

impl Marker {
    pub fn new(group: impl Into<String>, position: Vec3) -> Self {
        Self {
            group: group.into(),
            position,
        }
    }
}

/// An instantiated level
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Level {
    pub name: String,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl Level {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    /// Add a marker, builder style
    pub fn with_marker(mut self, group: &str, position: Vec3) -> Self {
        self.markers.push(Marker::new(group, position));
        self
    }

    /// Positions of every marker in `group`, in file order
    pub fn positions_in_group(&self, group: &str) -> Vec<Vec3> {
        self.markers
            .iter()
            .filter(|m| m.group == group)
            .map(|m| m.position)
            .collect()
    }
}
