// src/model/trained.rs

use crate::errors::ConfigError;
use crate::model::registry::FeatureLayout;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What the linear combination predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Price,
    /// Natural log of the price.
    LogPrice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureWeight {
    pub name: String,
    pub weight: f64,
}

/// Sale year column the model was trained with.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SaleYear {
    pub mean: f64,
    pub std: f64,
    pub weight: f64,
    pub default_year: i32,
}

impl SaleYear {
    pub fn scaled(&self, year: i32) -> f64 {
        (year as f64 - self.mean) / self.std
    }

    pub fn contribution(&self, year: i32) -> f64 {
        self.weight * self.scaled(year)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelFile {
    pub target: Target,
    pub intercept: f64,
    #[serde(default)]
    pub rmse: f64,
    pub features: Vec<FeatureWeight>,
    #[serde(default)]
    pub sale_year: Option<SaleYear>,
}

/// Frozen regression model. Built once at startup and only ever read.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    target: Target,
    intercept: f64,
    rmse: f64,
    columns: Arc<[String]>,
    weights: Vec<f64>,
    sale_year: Option<SaleYear>,
    valuation_year: Option<i32>,
}

impl TrainedModel {
    /// Validates `file` against the encoder layout. The model keeps a handle
    /// to the layout's columns so every prediction can check vector order.
    pub fn from_file(
        file: ModelFile,
        layout: &FeatureLayout,
        valuation_year: Option<i32>,
    ) -> Result<Self, ConfigError> {
        finite("intercept", file.intercept)?;
        finite("rmse", file.rmse)?;
        if file.rmse < 0.0 {
            return Err(ConfigError::Schema(format!(
                "rmse must not be negative, got {}",
                file.rmse
            )));
        }

        let expected = layout.columns();
        if file.features.len() != expected.len() {
            return Err(ConfigError::Schema(format!(
                "model has {} features, encoder produces {}",
                file.features.len(),
                expected.len()
            )));
        }

        let mut weights = Vec::with_capacity(file.features.len());
        for (index, (feature, column)) in file.features.iter().zip(expected.iter()).enumerate() {
            if &feature.name != column {
                return Err(ConfigError::Schema(format!(
                    "column {index} is {:?} in the model but {column:?} in the encoder",
                    feature.name
                )));
            }
            finite(&feature.name, feature.weight)?;
            weights.push(feature.weight);
        }

        if let Some(sy) = &file.sale_year {
            finite("sale_year.mean", sy.mean)?;
            finite("sale_year.weight", sy.weight)?;
            if !(sy.std.is_finite() && sy.std > 0.0) {
                return Err(ConfigError::NonPositiveStd {
                    name: "sale_year.std",
                    value: sy.std,
                });
            }
        }

        let valuation_year = match (file.sale_year, valuation_year) {
            (Some(sy), year) => Some(year.unwrap_or(sy.default_year)),
            (None, None) => None,
            (None, Some(year)) => {
                return Err(ConfigError::InvalidEnv {
                    key: "ESTIMATOR_VALUATION_YEAR",
                    value: format!("{year} (model has no sale_year column)"),
                })
            }
        };

        Ok(Self {
            target: file.target,
            intercept: file.intercept,
            rmse: file.rmse,
            columns: Arc::clone(expected),
            weights,
            sale_year: file.sale_year,
            valuation_year,
        })
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    pub fn columns(&self) -> &Arc<[String]> {
        &self.columns
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Year the sale-year column is evaluated at, if the model has one.
    pub fn valuation_year(&self) -> Option<i32> {
        self.valuation_year
    }

    /// Constant sale-year term, zero for models without the column.
    pub fn sale_year_offset(&self) -> f64 {
        match (self.sale_year, self.valuation_year) {
            (Some(sy), Some(year)) => sy.contribution(year),
            _ => 0.0,
        }
    }
}

fn finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            name: name.to_string(),
            value,
        })
    }
}
