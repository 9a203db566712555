use serde::{de::DeserializeOwned, Serialize};
use sqlx::{postgres::PgRow, FromRow};
use validator::Validate;

/// Value bound to a writable column
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i32),
    Text(String),
}

/// Client-facing messages for the constraint violations a resource maps.
/// `None` leaves the violation unclassified (server error).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintPolicy {
    /// Foreign key violation on create/update: a referenced parent is missing
    pub missing_reference: Option<&'static str>,
    /// Foreign key violation on delete: dependent rows still reference this one
    pub dependents_exist: Option<&'static str>,
    /// Unique violation on create/update
    pub duplicate: Option<&'static str>,
}

/// Static description of one CRUD resource: where it lives, how it reads
/// back, what a request body must look like and how its constraint
/// violations surface to clients.
pub trait Resource: Send + Sync + 'static {
    type Record: for<'r> FromRow<'r, PgRow> + Serialize + Clone + Send + Sync + Unpin + 'static;
    type Input: Validate + DeserializeOwned + Send + Sync + 'static;

    /// Mount point, e.g. `car-colors`
    const PATH: &'static str;
    const TABLE: &'static str;
    /// Singular display name used in messages, e.g. `Car color`
    const ENTITY: &'static str;
    /// Writable columns, in the order `values` returns them
    const COLUMNS: &'static [&'static str];
    /// Select list qualified by `TABLE` (and joined tables)
    const PROJECTION: &'static str;
    /// Joins appended after `FROM TABLE`
    const JOINS: &'static str = "";
    const POLICY: ConstraintPolicy;

    fn values(input: Self::Input) -> Vec<SqlValue>;
}
