// src/domain/encoder.rs

use crate::domain::input::{MAX_ROOMS, MIN_ROOMS};
use crate::domain::{EstimateError, RawInput};
use crate::model::{CategoryRegistry, ScalingParameters, Slot};
use std::sync::Arc;

/// Model input in training column order. Carries the column names it was
/// laid out for so the estimator can refuse a vector built for another model.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatureVector {
    columns: Arc<[String]>,
    values: Vec<f64>,
}

impl EncodedFeatureVector {
    pub fn new(columns: Arc<[String]>, values: Vec<f64>) -> Self {
        Self { columns, values }
    }

    pub fn columns(&self) -> &Arc<[String]> {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn get(&self, column: &str) -> Option<f64> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.values.get(index).copied()
    }
}

/// Turns raw form answers into the vector the model was trained on.
///
/// Pure: the same input, registries and scaling always give the same vector.
pub fn encode(
    raw: &RawInput,
    categories: &CategoryRegistry,
    scaling: &ScalingParameters,
) -> Result<EncodedFeatureVector, EstimateError> {
    let borough = categories
        .boroughs()
        .slot(&raw.borough)
        .ok_or_else(|| EstimateError::InvalidCategory {
            field: "borough",
            value: raw.borough.clone(),
        })?;

    let property_type = categories
        .property_types()
        .slot(&raw.property_type)
        .ok_or_else(|| EstimateError::InvalidCategory {
            field: "property type",
            value: raw.property_type.clone(),
        })?;

    if !raw.floor_area_sqm.is_finite() || raw.floor_area_sqm <= 0.0 {
        return Err(EstimateError::InvalidRange {
            field: "floor area",
            reason: format!("must be greater than 0 m², got {}", raw.floor_area_sqm),
        });
    }

    if !(MIN_ROOMS..=MAX_ROOMS).contains(&raw.room_count) {
        return Err(EstimateError::InvalidRange {
            field: "room count",
            reason: format!(
                "must be between {MIN_ROOMS} and {MAX_ROOMS}, got {}",
                raw.room_count
            ),
        });
    }

    let layout = categories.layout();
    let mut values = vec![0.0; layout.len()];

    if let Slot::Column(i) = borough {
        values[layout.borough_offset() + i] = 1.0;
    }
    if let Slot::Column(i) = property_type {
        values[layout.property_type_offset() + i] = 1.0;
    }
    values[layout.floor_area_index()] = scaling.scale_floor_area(raw.floor_area_sqm);
    values[layout.rooms_index()] = scaling.scale_rooms(raw.room_count);
    values[layout.new_build_index()] = if raw.is_new_build { 1.0 } else { 0.0 };

    Ok(EncodedFeatureVector::new(Arc::clone(layout.columns()), values))
}
