use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::database::resource::{ConstraintPolicy, Resource, SqlValue};
use crate::validation::{deserialize_loose_i32, deserialize_loose_string};

/// A car model, read back with its brand's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Model {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub brand_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModelInput {
    #[serde(deserialize_with = "deserialize_loose_i32")]
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub brand_id: i32,
    #[serde(deserialize_with = "deserialize_loose_string")]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
}

pub struct Models;

impl Resource for Models {
    type Record = Model;
    type Input = ModelInput;

    const PATH: &'static str = "models";
    const TABLE: &'static str = "models";
    const ENTITY: &'static str = "Model";
    const COLUMNS: &'static [&'static str] = &["brand_id", "name"];
    const PROJECTION: &'static str =
        "models.id, models.brand_id, models.name, models.created_at, brands.name AS brand_name";
    const JOINS: &'static str = "INNER JOIN brands ON models.brand_id = brands.id";
    const POLICY: ConstraintPolicy = ConstraintPolicy {
        missing_reference: Some("Referenced brand does not exist"),
        dependents_exist: Some("Cannot delete model: cars still reference it"),
        duplicate: None,
    };

    fn values(input: ModelInput) -> Vec<SqlValue> {
        vec![SqlValue::Int(input.brand_id), SqlValue::Text(input.name)]
    }
}
