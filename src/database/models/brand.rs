use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::database::resource::{ConstraintPolicy, Resource, SqlValue};
use crate::validation::deserialize_loose_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BrandInput {
    #[serde(deserialize_with = "deserialize_loose_string")]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
}

pub struct Brands;

impl Resource for Brands {
    type Record = Brand;
    type Input = BrandInput;

    const PATH: &'static str = "brands";
    const TABLE: &'static str = "brands";
    const ENTITY: &'static str = "Brand";
    const COLUMNS: &'static [&'static str] = &["name"];
    const PROJECTION: &'static str = "brands.id, brands.name, brands.created_at";
    const POLICY: ConstraintPolicy = ConstraintPolicy {
        missing_reference: None,
        dependents_exist: Some("Cannot delete brand: models still reference it"),
        duplicate: Some("Brand with this name already exists"),
    };

    fn values(input: BrandInput) -> Vec<SqlValue> {
        vec![SqlValue::Text(input.name)]
    }
}
