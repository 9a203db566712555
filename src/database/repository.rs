use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::error::RepositoryError;
use crate::database::query_builder::{bind_values, QueryBuilder};
use crate::database::resource::Resource;

/// Persistence operations for one resource.
///
/// Each call is exactly one statement. A missing row is `Ok(None)`, never an
/// error; constraint violations come back as typed `RepositoryError`s.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// All rows, ordered by id
    async fn list(&self) -> Result<Vec<R::Record>, RepositoryError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<R::Record>, RepositoryError>;

    /// Insert and return the stored row with its generated id and timestamp
    async fn create(&self, input: R::Input) -> Result<R::Record, RepositoryError>;

    /// Replace every writable column of the row matching `id`
    async fn update(&self, id: i32, input: R::Input) -> Result<Option<R::Record>, RepositoryError>;

    /// Remove the row matching `id` and return its prior state
    async fn delete(&self, id: i32) -> Result<Option<R::Record>, RepositoryError>;
}

/// Shared handle the route handlers hold
pub type Store<R> = Arc<dyn ResourceStore<R>>;

/// PostgreSQL-backed store over an injected pool
pub struct Repository<R> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<R>,
}

impl<R: Resource> Repository<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn into_store(self) -> Store<R> {
        Arc::new(self)
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for Repository<R> {
    async fn list(&self) -> Result<Vec<R::Record>, RepositoryError> {
        let sql = QueryBuilder::<R>::list_sql();
        let rows = sqlx::query_as::<_, R::Record>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<R::Record>, RepositoryError> {
        let sql = QueryBuilder::<R>::get_sql();
        let row = sqlx::query_as::<_, R::Record>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: R::Input) -> Result<R::Record, RepositoryError> {
        let sql = QueryBuilder::<R>::insert_sql();
        let q = sqlx::query_as::<_, R::Record>(&sql);
        let row = bind_values(q, R::values(input)).fetch_one(&self.pool).await?;
        Ok(row)
    }

    async fn update(&self, id: i32, input: R::Input) -> Result<Option<R::Record>, RepositoryError> {
        let sql = QueryBuilder::<R>::update_sql();
        let q = sqlx::query_as::<_, R::Record>(&sql).bind(id);
        let row = bind_values(q, R::values(input))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<Option<R::Record>, RepositoryError> {
        let sql = QueryBuilder::<R>::delete_sql();
        let row = sqlx::query_as::<_, R::Record>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
