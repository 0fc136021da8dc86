use maud::{html, Markup};

pub mod error;
pub mod estimate_form;

pub use error::html_error_response;
pub use estimate_form::estimate_form;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Whole pounds with thousands separators, e.g. `£1,234,568`.
pub fn format_gbp(amount: f64) -> String {
    if !amount.is_finite() {
        return "£–".to_string();
    }

    // `{:.0}` prints every integer digit; an integer cast would saturate.
    let digits = format!("{:.0}", amount.abs().round());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount.round() < 0.0 {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}
