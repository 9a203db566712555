use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::color::ColorInput;
use crate::database::resource::{ConstraintPolicy, Resource, SqlValue};

/// Color a car can be painted in (referenced by `cars.color_id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CarColor {
    pub id: i32,
    pub name: String,
    pub hex_code: String,
    pub created_at: DateTime<Utc>,
}

pub struct CarColors;

impl Resource for CarColors {
    type Record = CarColor;
    type Input = ColorInput;

    const PATH: &'static str = "car-colors";
    const TABLE: &'static str = "car_colors";
    const ENTITY: &'static str = "Car color";
    const COLUMNS: &'static [&'static str] = &["name", "hex_code"];
    const PROJECTION: &'static str =
        "car_colors.id, car_colors.name, car_colors.hex_code, car_colors.created_at";
    const POLICY: ConstraintPolicy = ConstraintPolicy {
        missing_reference: None,
        dependents_exist: Some("Cannot delete color: cars still reference it"),
        duplicate: Some("Car color with this name already exists"),
    };

    fn values(input: ColorInput) -> Vec<SqlValue> {
        input.into_values()
    }
}
