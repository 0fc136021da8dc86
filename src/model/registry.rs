// src/model/registry.rs

use crate::errors::ConfigError;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

pub const FLOOR_AREA_COLUMN: &str = "floor_area_scaled";
pub const ROOMS_COLUMN: &str = "rooms_scaled";
pub const NEW_BUILD_COLUMN: &str = "is_new_build";

/// How a categorical column was expanded at training time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneHot {
    /// The first label is the baseline and has no column of its own.
    DropFirst,
    /// Every label gets a column.
    Full,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFile {
    pub encoding: OneHot,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryFile {
    pub version: String,
    pub boroughs: CategoryFile,
    pub property_types: CategoryFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Baseline,
    Column(usize),
}

/// One ordered category list, exactly as it was seen during training.
#[derive(Debug, Clone)]
pub struct Category {
    encoding: OneHot,
    labels: Vec<String>,
}

impl Category {
    fn new(field: &str, file: CategoryFile) -> Result<Self, ConfigError> {
        if file.labels.is_empty() {
            return Err(ConfigError::Registry(format!("{field} has no labels")));
        }

        let mut seen = HashSet::new();
        for label in &file.labels {
            if label.trim().is_empty() {
                return Err(ConfigError::Registry(format!("{field} has an empty label")));
            }
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::Registry(format!(
                    "{field} lists {label:?} twice"
                )));
            }
        }

        Ok(Self {
            encoding: file.encoding,
            labels: file.labels,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[cfg(test)]
    pub fn encoding(&self) -> OneHot {
        self.encoding
    }

    /// Number of one-hot columns this category occupies.
    pub fn width(&self) -> usize {
        match self.encoding {
            OneHot::DropFirst => self.labels.len() - 1,
            OneHot::Full => self.labels.len(),
        }
    }

    /// Where `label` lands within this category's columns, `None` if unknown.
    pub fn slot(&self, label: &str) -> Option<Slot> {
        let position = self.labels.iter().position(|l| l == label)?;
        Some(match (self.encoding, position) {
            (OneHot::DropFirst, 0) => Slot::Baseline,
            (OneHot::DropFirst, p) => Slot::Column(p - 1),
            (OneHot::Full, p) => Slot::Column(p),
        })
    }

    fn columns<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = String> + 'a {
        let skip = match self.encoding {
            OneHot::DropFirst => 1,
            OneHot::Full => 0,
        };
        self.labels
            .iter()
            .skip(skip)
            .map(move |l| format!("{prefix}={l}"))
    }
}

/// Column order shared by the encoder and the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureLayout {
    columns: Arc<[String]>,
    property_type_offset: usize,
    floor_area: usize,
    rooms: usize,
    new_build: usize,
}

impl FeatureLayout {
    pub fn columns(&self) -> &Arc<[String]> {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn borough_offset(&self) -> usize {
        0
    }

    pub fn property_type_offset(&self) -> usize {
        self.property_type_offset
    }

    pub fn floor_area_index(&self) -> usize {
        self.floor_area
    }

    pub fn rooms_index(&self) -> usize {
        self.rooms
    }

    pub fn new_build_index(&self) -> usize {
        self.new_build
    }
}

/// Versioned borough and property-type registries plus the layout derived from them.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    version: String,
    boroughs: Category,
    property_types: Category,
    layout: FeatureLayout,
}

impl CategoryRegistry {
    pub fn from_file(file: RegistryFile) -> Result<Self, ConfigError> {
        let boroughs = Category::new("boroughs", file.boroughs)?;
        let property_types = Category::new("property_types", file.property_types)?;

        let columns: Vec<String> = boroughs
            .columns("borough")
            .chain(property_types.columns("property_type"))
            .chain([
                FLOOR_AREA_COLUMN.to_string(),
                ROOMS_COLUMN.to_string(),
                NEW_BUILD_COLUMN.to_string(),
            ])
            .collect();

        let property_type_offset = boroughs.width();
        let floor_area = property_type_offset + property_types.width();
        let layout = FeatureLayout {
            columns: columns.into(),
            property_type_offset,
            floor_area,
            rooms: floor_area + 1,
            new_build: floor_area + 2,
        };

        Ok(Self {
            version: file.version,
            boroughs,
            property_types,
            layout,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn boroughs(&self) -> &Category {
        &self.boroughs
    }

    pub fn property_types(&self) -> &Category {
        &self.property_types
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }
}
