// src/domain/input.rs

use crate::domain::EstimateError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const MIN_ROOMS: i64 = 1;
pub const MAX_ROOMS: i64 = 10;

/// One set of form answers, captured as the user submitted them.
/// Nothing here is validated yet; that happens in `encode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub borough: String,
    pub property_type: String,
    pub floor_area_sqm: f64,
    pub room_count: i64,
    #[serde(default)]
    pub is_new_build: bool,
}

impl Default for RawInput {
    /// What the form shows before anything is submitted.
    fn default() -> Self {
        Self {
            borough: "Hackney".to_string(),
            property_type: "Flat".to_string(),
            floor_area_sqm: 75.0,
            room_count: 4,
            is_new_build: false,
        }
    }
}

impl RawInput {
    /// Builds an input from decoded `application/x-www-form-urlencoded` pairs.
    ///
    /// A missing select is reported as an unknown category, a missing or
    /// non-numeric number as out of range. An unchecked checkbox is simply
    /// absent, so `is_new_build` defaults to false.
    pub fn from_form<'a, I>(pairs: I) -> Result<Self, EstimateError>
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut borough = None;
        let mut property_type = None;
        let mut floor_area = None;
        let mut rooms = None;
        let mut is_new_build = false;

        for (key, value) in pairs {
            match &*key {
                "borough" => borough = Some(value.into_owned()),
                "property_type" => property_type = Some(value.into_owned()),
                "floor_area_sqm" => floor_area = Some(value.into_owned()),
                "room_count" => rooms = Some(value.into_owned()),
                "is_new_build" => is_new_build = parse_flag(&value),
                _ => {}
            }
        }

        let floor_area_sqm = floor_area
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| required("floor area"))?
            .parse::<f64>()
            .map_err(|_| EstimateError::InvalidRange {
                field: "floor area",
                reason: "must be a number".into(),
            })?;

        let room_count = rooms
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| required("room count"))?
            .parse::<i64>()
            .map_err(|_| EstimateError::InvalidRange {
                field: "room count",
                reason: "must be a whole number".into(),
            })?;

        Ok(Self {
            borough: borough.unwrap_or_default(),
            property_type: property_type.unwrap_or_default(),
            floor_area_sqm,
            room_count,
            is_new_build,
        })
    }
}

/// JSON shape of POST /api/estimate. Every field may be absent so that a
/// missing value is reported the same way the form route reports it.
#[derive(Debug, Default, Deserialize)]
pub struct ApiInput {
    pub borough: Option<String>,
    pub property_type: Option<String>,
    pub floor_area_sqm: Option<f64>,
    pub room_count: Option<i64>,
    #[serde(default)]
    pub is_new_build: bool,
}

impl ApiInput {
    pub fn into_raw(self) -> Result<RawInput, EstimateError> {
        Ok(RawInput {
            floor_area_sqm: self.floor_area_sqm.ok_or_else(|| required("floor area"))?,
            room_count: self.room_count.ok_or_else(|| required("room count"))?,
            borough: self.borough.unwrap_or_default(),
            property_type: self.property_type.unwrap_or_default(),
            is_new_build: self.is_new_build,
        })
    }
}

fn required(field: &'static str) -> EstimateError {
    EstimateError::InvalidRange {
        field,
        reason: "is required".into(),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes" | "new"
    )
}
