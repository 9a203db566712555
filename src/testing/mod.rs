//! In-memory stand-ins for the PostgreSQL repositories, used by handler
//! tests to drive the real router without a database.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::Mutex;
use tower::ServiceExt;

use crate::database::error::RepositoryError;
use crate::database::models::{Brand, BrandInput, Brands};
use crate::database::repository::ResourceStore;
use crate::database::resource::Resource;

/// Brands held in a vector, enforcing unique names and refusing to delete
/// ids listed as referenced
#[derive(Default)]
pub struct MemoryBrands {
    rows: Mutex<Vec<Brand>>,
    referenced: Vec<i32>,
}

impl MemoryBrands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `ids` as having dependent models
    pub fn with_dependents(mut self, ids: &[i32]) -> Self {
        self.referenced = ids.to_vec();
        self
    }

    fn duplicate() -> RepositoryError {
        RepositoryError::UniqueViolation {
            constraint: Some("brands_name_key".to_string()),
        }
    }
}

#[async_trait]
impl ResourceStore<Brands> for MemoryBrands {
    async fn list(&self) -> Result<Vec<Brand>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Brand>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, input: BrandInput) -> Result<Brand, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|b| b.name == input.name) {
            return Err(Self::duplicate());
        }
        let brand = Brand {
            id: rows.iter().map(|b| b.id).max().unwrap_or(0) + 1,
            name: input.name,
            created_at: Utc::now(),
        };
        rows.push(brand.clone());
        Ok(brand)
    }

    async fn update(&self, id: i32, input: BrandInput) -> Result<Option<Brand>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|b| b.name == input.name && b.id != id) {
            return Err(Self::duplicate());
        }
        Ok(rows.iter_mut().find(|b| b.id == id).map(|b| {
            b.name = input.name;
            b.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Brand>, RepositoryError> {
        if self.referenced.contains(&id) {
            return Err(RepositoryError::ForeignKeyViolation {
                constraint: Some("models_brand_id_fkey".to_string()),
            });
        }
        let mut rows = self.rows.lock().unwrap();
        let pos = rows.iter().position(|b| b.id == id);
        Ok(pos.map(|i| rows.remove(i)))
    }
}

/// Store whose every call fails with the error `make` builds
pub struct FailingStore {
    make: fn() -> RepositoryError,
}

impl FailingStore {
    pub fn new(make: fn() -> RepositoryError) -> Self {
        Self { make }
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for FailingStore {
    async fn list(&self) -> Result<Vec<R::Record>, RepositoryError> {
        Err((self.make)())
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<R::Record>, RepositoryError> {
        Err((self.make)())
    }

    async fn create(&self, _input: R::Input) -> Result<R::Record, RepositoryError> {
        Err((self.make)())
    }

    async fn update(&self, _id: i32, _input: R::Input) -> Result<Option<R::Record>, RepositoryError> {
        Err((self.make)())
    }

    async fn delete(&self, _id: i32) -> Result<Option<R::Record>, RepositoryError> {
        Err((self.make)())
    }
}

/// Send one request through `app` and decode the JSON reply
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    dispatch(app, request).await
}

/// Like `send`, with an explicit content type
pub async fn send_as(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
