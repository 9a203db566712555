//! Generic CRUD handlers shared by every catalog resource.
//!
//! Each request runs validate → one repository call → classify, and ends in
//! exactly one response.

use axum::{extract::State, routing::get, Router};

use crate::database::repository::Store;
use crate::database::resource::Resource;
use crate::error::ApiError;
use crate::handlers::classify::{classify, Operation};
use crate::middleware::{ApiResponse, ApiResult, IdPath, ValidatedJson};

fn not_found<R: Resource>() -> ApiError {
    ApiError::not_found(format!("{} not found", R::ENTITY))
}

fn failed<R: Resource>(op: Operation) -> impl FnOnce(crate::database::RepositoryError) -> ApiError {
    move |err| classify(R::ENTITY, &R::POLICY, op, err)
}

/// GET /{resource}
pub async fn list<R: Resource>(State(store): State<Store<R>>) -> ApiResult<Vec<R::Record>> {
    let rows = store.list().await.map_err(failed::<R>(Operation::List))?;
    Ok(ApiResponse::success(rows))
}

/// GET /{resource}/:id
pub async fn show<R: Resource>(
    State(store): State<Store<R>>,
    IdPath(id): IdPath,
) -> ApiResult<R::Record> {
    let Some(id) = id else {
        return Err(not_found::<R>());
    };

    store
        .get_by_id(id)
        .await
        .map_err(failed::<R>(Operation::Get))?
        .map(ApiResponse::success)
        .ok_or_else(not_found::<R>)
}

/// POST /{resource}
pub async fn create<R: Resource>(
    State(store): State<Store<R>>,
    ValidatedJson(input): ValidatedJson<R::Input>,
) -> ApiResult<R::Record> {
    let row = store.create(input).await.map_err(failed::<R>(Operation::Create))?;
    Ok(ApiResponse::created(row))
}

/// PUT /{resource}/:id - full replace
pub async fn update<R: Resource>(
    State(store): State<Store<R>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<R::Input>,
) -> ApiResult<R::Record> {
    let Some(id) = id else {
        return Err(not_found::<R>());
    };

    store
        .update(id, input)
        .await
        .map_err(failed::<R>(Operation::Update))?
        .map(ApiResponse::success)
        .ok_or_else(not_found::<R>)
}

/// DELETE /{resource}/:id - responds with the removed row
pub async fn delete<R: Resource>(
    State(store): State<Store<R>>,
    IdPath(id): IdPath,
) -> ApiResult<R::Record> {
    let Some(id) = id else {
        return Err(not_found::<R>());
    };

    store
        .delete(id)
        .await
        .map_err(failed::<R>(Operation::Delete))?
        .map(ApiResponse::success)
        .ok_or_else(not_found::<R>)
}

/// Route set for one resource, mounted at `/{R::PATH}`
pub fn routes<R: Resource>(store: Store<R>) -> Router {
    let collection = format!("/{}", R::PATH);
    let member = format!("/{}/:id", R::PATH);

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&member, get(show::<R>).put(update::<R>).delete(delete::<R>))
        .with_state(store)
}
