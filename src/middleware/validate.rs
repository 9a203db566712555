use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::ApiError;
use crate::validation;

/// JSON body deserialized into `T` and checked with its `validator` rules
/// before the handler runs
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;

        // serde would otherwise accept a JSON array for a struct
        if !body.is_object() {
            return Err(ApiError::invalid_json("Request body must be a JSON object"));
        }

        let input: T = serde_json::from_value(body)
            .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))?;
        input.validate()?;

        Ok(ValidatedJson(input))
    }
}

/// `:id` path segment. `None` when the id is well-formed but out of range,
/// which handlers answer with 404.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Option<i32>);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        validation::parse_id(&raw).map(IdPath)
    }
}
