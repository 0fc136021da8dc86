use crate::domain::{Breakdown, Estimate, Estimator, RawInput};
use crate::templates::components::estimate_form;
use crate::templates::pages::home::{disclaimer, model_label};
use crate::templates::{card, desktop_layout, format_gbp};
use maud::{html, Markup};

pub fn estimate_page(estimator: &Estimator, input: &RawInput, estimate: &Estimate) -> Markup {
    let bundle = estimator.bundle();
    desktop_layout(
        "Estimated Price",
        &model_label(estimator),
        html! {
            section class="card" id="estimate-result" {
                p class="price" { "Estimated Price: " (format_gbp(estimate.price.value())) }
                p { em {
                    "Likely range: " (format_gbp(estimate.range.low))
                    " – " (format_gbp(estimate.range.high))
                } }
            }

            (card("How this was calculated", breakdown_table(&estimate.breakdown)))

            (estimate_form(&bundle.categories, input, None))
            (disclaimer())
        },
    )
}

fn breakdown_table(breakdown: &Breakdown) -> Markup {
    html! {
        table {
            tbody {
                @for (i, term) in breakdown.terms.iter().enumerate() {
                    tr {
                        td { (term.label) }
                        td class="num" {
                            @if i == 0 {
                                (format_gbp(breakdown.base_price()))
                            } @else {
                                @match breakdown.multiplier(term) {
                                    Some(m) => (format!("×{m:.2}")),
                                    None => (signed_gbp(term.contribution)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn signed_gbp(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+{}", format_gbp(amount))
    } else {
        format_gbp(amount)
    }
}
