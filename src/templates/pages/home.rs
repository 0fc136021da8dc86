// templates/pages/home.rs

use crate::domain::{Estimator, RawInput};
use crate::templates::{components::estimate_form, desktop_layout};
use maud::{html, Markup};

pub fn home_page(estimator: &Estimator, input: &RawInput, error: Option<&str>) -> Markup {
    let bundle = estimator.bundle();
    desktop_layout(
        "London Property Price Estimator",
        &model_label(estimator),
        html! {
            p { "Get an instant price estimate for properties across London boroughs." }
            (estimate_form(&bundle.categories, input, error))
            (disclaimer())
        },
    )
}

pub fn model_label(estimator: &Estimator) -> String {
    let bundle = estimator.bundle();
    format!(
        "{} v{} (categories {})",
        bundle.name,
        bundle.version,
        bundle.categories.version()
    )
}

pub fn disclaimer() -> Markup {
    html! {
        p class="caption" {
            "This is a demo for educational purposes. "
            "Always consult professional valuers for actual property decisions."
        }
    }
}
