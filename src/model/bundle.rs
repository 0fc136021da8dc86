// src/model/bundle.rs

use crate::errors::ConfigError;
use crate::model::registry::{CategoryRegistry, RegistryFile};
use crate::model::scaling::ScalingParameters;
use crate::model::trained::{ModelFile, TrainedModel};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of `model/london.json`.
#[derive(Debug, Deserialize)]
struct BundleFile {
    name: String,
    version: String,
    categories: RegistryFile,
    scaling: ScalingParameters,
    model: ModelFile,
}

/// Everything one estimate needs, validated together so the registries,
/// the scaling constants and the model weights always belong to the same
/// training run.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub name: String,
    pub version: String,
    pub categories: CategoryRegistry,
    pub scaling: ScalingParameters,
    pub model: TrainedModel,
}

impl ModelBundle {
    pub fn load(path: impl AsRef<Path>, valuation_year: Option<i32>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw, valuation_year)
    }

    pub fn from_json(raw: &str, valuation_year: Option<i32>) -> Result<Self, ConfigError> {
        let file: BundleFile = serde_json::from_str(raw)?;

        if file.name.trim().is_empty() {
            return Err(ConfigError::Missing("artifact name".into()));
        }

        file.scaling.validate()?;
        let categories = CategoryRegistry::from_file(file.categories)?;
        let model = TrainedModel::from_file(file.model, categories.layout(), valuation_year)?;

        Ok(Self {
            name: file.name,
            version: file.version,
            categories,
            scaling: file.scaling,
            model,
        })
    }
}
