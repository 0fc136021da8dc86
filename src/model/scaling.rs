// src/model/scaling.rs

use crate::errors::ConfigError;
use serde::Deserialize;

/// Transform applied to the floor area before it is standardized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorAreaTransform {
    #[default]
    Identity,
    /// `ln(1 + x)`
    Log1p,
}

impl FloorAreaTransform {
    pub fn apply(self, sqm: f64) -> f64 {
        match self {
            FloorAreaTransform::Identity => sqm,
            FloorAreaTransform::Log1p => sqm.ln_1p(),
        }
    }
}

/// Training-time statistics for the numeric columns. These must be the exact
/// values the model was fit with; they are never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScalingParameters {
    #[serde(default)]
    pub floor_area_transform: FloorAreaTransform,
    pub floor_area_mean: f64,
    pub floor_area_std: f64,
    pub rooms_mean: f64,
    pub rooms_std: f64,
}

impl ScalingParameters {
    /// Rejects non-finite means and any std that is not strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("floor_area_mean", self.floor_area_mean),
            ("rooms_mean", self.rooms_mean),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    name: name.to_string(),
                    value,
                });
            }
        }

        for (name, value) in [
            ("floor_area_std", self.floor_area_std),
            ("rooms_std", self.rooms_std),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveStd { name, value });
            }
        }

        Ok(())
    }

    pub fn scale_floor_area(&self, sqm: f64) -> f64 {
        (self.floor_area_transform.apply(sqm) - self.floor_area_mean) / self.floor_area_std
    }

    pub fn scale_rooms(&self, rooms: i64) -> f64 {
        (rooms as f64 - self.rooms_mean) / self.rooms_std
    }
}
