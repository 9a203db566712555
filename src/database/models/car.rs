use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::database::resource::{ConstraintPolicy, Resource, SqlValue};
use crate::validation::{deserialize_loose_i32, deserialize_loose_string, VIN_REGEX};

/// A car, read back with its model, brand and color denormalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i32,
    pub model_id: i32,
    pub color_id: i32,
    pub year: i32,
    pub vin: String,
    pub created_at: DateTime<Utc>,
    pub model_name: String,
    pub brand_name: String,
    pub color_name: String,
    pub hex_code: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarInput {
    #[serde(deserialize_with = "deserialize_loose_i32")]
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub model_id: i32,
    #[serde(deserialize_with = "deserialize_loose_i32")]
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub color_id: i32,
    #[serde(deserialize_with = "deserialize_loose_i32")]
    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    pub year: i32,
    // 17 characters, digits and capitals except I, O, Q
    #[serde(deserialize_with = "deserialize_loose_string")]
    #[validate(regex(path = *VIN_REGEX, message = "must be a 17-character VIN"))]
    pub vin: String,
}

pub struct Cars;

impl Resource for Cars {
    type Record = Car;
    type Input = CarInput;

    const PATH: &'static str = "cars";
    const TABLE: &'static str = "cars";
    const ENTITY: &'static str = "Car";
    const COLUMNS: &'static [&'static str] = &["model_id", "color_id", "year", "vin"];
    const PROJECTION: &'static str = "cars.id, cars.model_id, cars.color_id, cars.year, cars.vin, cars.created_at, \
         models.name AS model_name, brands.name AS brand_name, \
         car_colors.name AS color_name, car_colors.hex_code";
    const JOINS: &'static str = "INNER JOIN models ON cars.model_id = models.id \
         INNER JOIN brands ON models.brand_id = brands.id \
         INNER JOIN car_colors ON cars.color_id = car_colors.id";
    const POLICY: ConstraintPolicy = ConstraintPolicy {
        missing_reference: Some("Referenced model or color does not exist"),
        dependents_exist: None,
        duplicate: Some("Car with this VIN already exists"),
    };

    fn values(input: CarInput) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(input.model_id),
            SqlValue::Int(input.color_id),
            SqlValue::Int(input.year),
            SqlValue::Text(input.vin),
        ]
    }
}
