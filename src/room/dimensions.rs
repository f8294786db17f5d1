//! Room dimension vector.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Length, width and height of a shoebox room (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct RoomDimensions {
    extent_m: DVec3,
}

impl RoomDimensions {
    pub fn new(length_m: f64, width_m: f64, height_m: f64) -> Self {
        Self {
            extent_m: DVec3::new(length_m, width_m, height_m),
        }
    }

    pub fn length_m(&self) -> f64 {
        self.extent_m.x
    }

    pub fn width_m(&self) -> f64 {
        self.extent_m.y
    }

    pub fn height_m(&self) -> f64 {
        self.extent_m.z
    }

    pub fn extent(&self) -> DVec3 {
        self.extent_m
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.extent_m.to_array()
    }

    pub fn volume_m3(&self) -> f64 {
        self.extent_m.element_product()
    }

    /// All three sides must be finite and positive
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in ["length", "width", "height"].iter().zip(self.as_array()) {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("Room {} must be > 0, got {}", name, value));
            }
        }
        Ok(())
    }
}

impl From<[f64; 3]> for RoomDimensions {
    fn from([length, width, height]: [f64; 3]) -> Self {
        Self::new(length, width, height)
    }
}

impl From<RoomDimensions> for [f64; 3] {
    fn from(dims: RoomDimensions) -> Self {
        dims.as_array()
    }
}
