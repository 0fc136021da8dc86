use crate::domain::input::{MAX_ROOMS, MIN_ROOMS};
use crate::domain::RawInput;
use crate::model::CategoryRegistry;
use maud::{html, Markup};

/// The five-field form. `input` holds the values to show (defaults or the
/// last submission) and `error` the corrective message for a rejected one.
pub fn estimate_form(categories: &CategoryRegistry, input: &RawInput, error: Option<&str>) -> Markup {
    html! {
        form method="post" action="/estimate" class="card" id="estimate-form" {
            @if let Some(message) = error {
                p class="alert" role="alert" { (message) }
            }

            div class="grid" {
                div {
                    label for="borough" { "Borough" }
                    select name="borough" id="borough" required {
                        @for label in categories.boroughs().labels() {
                            option value=(label) selected[*label == input.borough] { (label) }
                        }
                    }
                }

                div {
                    label for="floor_area_sqm" { "Total Floor Area (m²)" }
                    input
                        type="number"
                        id="floor_area_sqm"
                        name="floor_area_sqm"
                        min="15"
                        max="500"
                        step="5"
                        value=(input.floor_area_sqm)
                        required;
                }

                div {
                    label for="property_type" { "Property Type" }
                    select name="property_type" id="property_type" required {
                        @for label in categories.property_types().labels() {
                            option value=(label) selected[*label == input.property_type] { (label) }
                        }
                    }
                }

                div {
                    label for="room_count" {
                        "Number of Habitable Rooms: "
                        output for="room_count" id="room_count_value" { (input.room_count) }
                    }
                    input
                        type="range"
                        id="room_count"
                        name="room_count"
                        min=(MIN_ROOMS)
                        max=(MAX_ROOMS)
                        step="1"
                        value=(input.room_count)
                        oninput="room_count_value.value = this.value";
                }
            }

            p {
                label {
                    input type="checkbox" name="is_new_build" value="on" checked[input.is_new_build];
                    " New build"
                }
            }

            button type="submit" class="primary" { "Get Price Estimate" }
        }
    }
}
