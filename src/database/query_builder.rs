use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::database::resource::{Resource, SqlValue};

/// Builds the single statement behind each repository operation.
///
/// Writes run inside a data-modifying CTE so the returned row goes through
/// the same projection and joins as a read.
pub struct QueryBuilder<R> {
    _phantom: std::marker::PhantomData<R>,
}

impl<R: Resource> QueryBuilder<R> {
    fn from_clause(source: &str) -> String {
        let mut clause = format!("SELECT {} FROM {}", R::PROJECTION, source);
        if !R::JOINS.is_empty() {
            clause.push(' ');
            clause.push_str(R::JOINS);
        }
        clause
    }

    fn from_affected(statement: String) -> String {
        format!(
            "WITH affected AS ({} RETURNING *) {}",
            statement,
            Self::from_clause(&format!("affected AS {}", R::TABLE))
        )
    }

    pub fn list_sql() -> String {
        format!("{} ORDER BY {}.id", Self::from_clause(R::TABLE), R::TABLE)
    }

    /// `$1` = id
    pub fn get_sql() -> String {
        format!("{} WHERE {}.id = $1", Self::from_clause(R::TABLE), R::TABLE)
    }

    /// `$1..$n` = columns
    pub fn insert_sql() -> String {
        let placeholders = (1..=R::COLUMNS.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");
        Self::from_affected(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders
        ))
    }

    /// `$1` = id, `$2..$n+1` = columns
    pub fn update_sql() -> String {
        let assignments = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        Self::from_affected(format!(
            "UPDATE {} SET {} WHERE id = $1",
            R::TABLE,
            assignments
        ))
    }

    /// `$1` = id
    pub fn delete_sql() -> String {
        Self::from_affected(format!("DELETE FROM {} WHERE id = $1", R::TABLE))
    }
}

pub(crate) fn bind_values<'q, T>(
    mut q: QueryAs<'q, Postgres, T, PgArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, T, PgArguments>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    for value in values {
        q = match value {
            SqlValue::Int(v) => q.bind(v),
            SqlValue::Text(v) => q.bind(v),
        };
    }
    q
}
