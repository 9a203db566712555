use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::database::resource::{ConstraintPolicy, Resource, SqlValue};
use crate::validation::{deserialize_loose_string, HEX_CODE_REGEX};

/// Standalone palette entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Color {
    pub id: i32,
    pub name: String,
    pub hex_code: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for both color resources
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ColorInput {
    #[serde(deserialize_with = "deserialize_loose_string")]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(deserialize_with = "deserialize_loose_string")]
    #[validate(regex(path = *HEX_CODE_REGEX, message = "must be a #RRGGBB hex code"))]
    pub hex_code: String,
}

impl ColorInput {
    pub(crate) fn into_values(self) -> Vec<SqlValue> {
        vec![SqlValue::Text(self.name), SqlValue::Text(self.hex_code)]
    }
}

pub struct Colors;

impl Resource for Colors {
    type Record = Color;
    type Input = ColorInput;

    const PATH: &'static str = "colors";
    const TABLE: &'static str = "colors";
    const ENTITY: &'static str = "Color";
    const COLUMNS: &'static [&'static str] = &["name", "hex_code"];
    const PROJECTION: &'static str = "colors.id, colors.name, colors.hex_code, colors.created_at";
    // Duplicate names are left unclassified here, unlike car colors
    const POLICY: ConstraintPolicy = ConstraintPolicy {
        missing_reference: None,
        dependents_exist: None,
        duplicate: None,
    };

    fn values(input: ColorInput) -> Vec<SqlValue> {
        input.into_values()
    }
}
