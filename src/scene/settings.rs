use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::SimError;

/// Scene parameters normally bound to GUI sliders.
///
/// Passed to vehicles by reference at display/control time rather than
/// shared through a global scene object. The GUI ranges (speed 0.1-3.0,
/// scale 0.5-3.0, complexity 0-1) are advisory; consumers tolerate
/// out-of-range values and clamp where it matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSettings {
    /// Uniform scale applied to the whole vehicle at display time.
    pub scale_factor: f64,
    /// Multiplier on per-frame turn and acceleration commands.
    pub speed_factor: f64,
    /// Fan mesh resolution, mapped linearly onto 3..=12 slices.
    pub complexity: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            speed_factor: 1.0,
            complexity: 0.5,
        }
    }
}

impl SceneSettings {
    /// Load settings from a YAML file.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}
