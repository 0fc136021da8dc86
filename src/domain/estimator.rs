// src/domain/estimator.rs

use crate::domain::encoder::{encode, EncodedFeatureVector};
use crate::domain::{EstimateError, RawInput};
use crate::model::{ModelBundle, Target, TrainedModel};
use serde::Serialize;
use std::sync::Arc;

/// Estimated price in GBP.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PricePrediction(pub f64);

impl PricePrediction {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Output of the linear part of the model, on the target's scale.
fn linear_score(vector: &EncodedFeatureVector, model: &TrainedModel) -> Result<f64, EstimateError> {
    let expected = model.columns();

    if vector.len() != expected.len() || vector.columns().len() != expected.len() {
        return Err(EstimateError::ShapeMismatch(format!(
            "expected {} features, got {}",
            expected.len(),
            vector.len()
        )));
    }

    if !Arc::ptr_eq(vector.columns(), expected) {
        if let Some((i, (got, want))) = vector
            .columns()
            .iter()
            .zip(expected.iter())
            .enumerate()
            .find(|(_, (got, want))| got != want)
        {
            return Err(EstimateError::ShapeMismatch(format!(
                "column {i} is {got:?}, model expects {want:?}"
            )));
        }
    }

    let dot: f64 = vector
        .values()
        .iter()
        .zip(model.weights())
        .map(|(x, w)| x * w)
        .sum();

    Ok(model.intercept() + model.sale_year_offset() + dot)
}

fn to_price(target: Target, score: f64) -> f64 {
    match target {
        Target::Price => score,
        Target::LogPrice => score.exp(),
    }
}

/// Applies the frozen model to an encoded vector.
pub fn predict(
    vector: &EncodedFeatureVector,
    model: &TrainedModel,
) -> Result<PricePrediction, EstimateError> {
    let score = linear_score(vector, model)?;
    Ok(PricePrediction(to_price(model.target(), score)))
}

/// Plus or minus one rmse around the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    fn around(target: Target, score: f64, rmse: f64) -> Self {
        match target {
            Target::LogPrice => Self {
                low: (score - rmse).exp(),
                high: (score + rmse).exp(),
            },
            Target::Price => Self {
                low: (score - rmse).max(0.0),
                high: score + rmse,
            },
        }
    }
}

/// One additive term of the linear score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub label: String,
    pub contribution: f64,
}

/// How the score was put together, term by term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub target: Target,
    pub terms: Vec<Term>,
}

impl Breakdown {
    /// Baseline, i.e. the intercept term, on the price scale.
    pub fn base_price(&self) -> f64 {
        self.terms
            .first()
            .map(|t| to_price(self.target, t.contribution))
            .unwrap_or(0.0)
    }

    /// `exp(term)` for log-price models; `None` for additive price models.
    pub fn multiplier(&self, term: &Term) -> Option<f64> {
        match self.target {
            Target::LogPrice => Some(term.contribution.exp()),
            Target::Price => None,
        }
    }

    #[cfg(test)]
    pub fn total(&self) -> f64 {
        self.terms.iter().map(|t| t.contribution).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub price: PricePrediction,
    pub range: PriceRange,
    pub breakdown: Breakdown,
}

/// Owns the loaded bundle and runs encode → predict for each request.
/// Shared read-only between workers.
#[derive(Debug, Clone)]
pub struct Estimator {
    bundle: Arc<ModelBundle>,
}

impl Estimator {
    pub fn new(bundle: ModelBundle) -> Self {
        Self {
            bundle: Arc::new(bundle),
        }
    }

    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    pub fn encode(&self, raw: &RawInput) -> Result<EncodedFeatureVector, EstimateError> {
        encode(raw, &self.bundle.categories, &self.bundle.scaling)
    }

    pub fn predict(&self, raw: &RawInput) -> Result<PricePrediction, EstimateError> {
        predict(&self.encode(raw)?, &self.bundle.model)
    }

    pub fn estimate(&self, raw: &RawInput) -> Result<Estimate, EstimateError> {
        let model = &self.bundle.model;
        let vector = self.encode(raw)?;
        let score = linear_score(&vector, model)?;

        Ok(Estimate {
            price: PricePrediction(to_price(model.target(), score)),
            range: PriceRange::around(model.target(), score, model.rmse()),
            breakdown: self.breakdown(raw, &vector),
        })
    }

    fn breakdown(&self, raw: &RawInput, vector: &EncodedFeatureVector) -> Breakdown {
        let model = &self.bundle.model;
        let layout = self.bundle.categories.layout();
        let weighted = |range: std::ops::Range<usize>| -> f64 {
            vector.values()[range.clone()]
                .iter()
                .zip(&model.weights()[range])
                .map(|(x, w)| x * w)
                .sum()
        };
        let pt = layout.property_type_offset();
        let fa = layout.floor_area_index();

        let mut terms = vec![
            Term {
                label: "Base price".into(),
                contribution: model.intercept(),
            },
            Term {
                label: format!("Borough ({})", raw.borough),
                contribution: weighted(layout.borough_offset()..pt),
            },
            Term {
                label: format!("Property type ({})", raw.property_type),
                contribution: weighted(pt..fa),
            },
            Term {
                label: "New build".into(),
                contribution: weighted(layout.new_build_index()..layout.new_build_index() + 1),
            },
        ];

        if let Some(year) = model.valuation_year() {
            terms.push(Term {
                label: format!("Sale year ({year})"),
                contribution: model.sale_year_offset(),
            });
        }

        terms.push(Term {
            label: format!("Floor area ({} m²)", raw.floor_area_sqm),
            contribution: weighted(fa..fa + 1),
        });
        terms.push(Term {
            label: format!("Rooms ({})", raw.room_count),
            contribution: weighted(layout.rooms_index()..layout.rooms_index() + 1),
        });

        Breakdown {
            target: model.target(),
            terms,
        }
    }
}
