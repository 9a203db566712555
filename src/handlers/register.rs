// POST /register - derive a registration summary from the submitted
// details. Nothing is stored.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub display_name: String,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        let name = req
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let email = req
            .email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());

        // Fall back to the mailbox part of the address
        let display_name = name
            .clone()
            .or_else(|| {
                email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .filter(|local| !local.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "anonymous".to_string());

        Registration {
            name,
            email,
            display_name,
        }
    }
}

pub async fn register_post(
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Registration> {
    let Json(req) = body.map_err(ApiError::from)?;
    Ok(ApiResponse::success(Registration::from(req)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: Option<&str>, name: Option<&str>) -> Registration {
        Registration::from(RegisterRequest {
            email: email.map(str::to_string),
            name: name.map(str::to_string),
        })
    }

    #[test]
    fn prefers_trimmed_name() {
        let r = register(Some(" Ann@Example.COM "), Some("  Ann Lee "));
        assert_eq!(r.name.as_deref(), Some("Ann Lee"));
        assert_eq!(r.email.as_deref(), Some("ann@example.com"));
        assert_eq!(r.display_name, "Ann Lee");
    }

    #[test]
    fn falls_back_to_email_local_part() {
        let r = register(Some("driver42@cars.test"), Some("   "));
        assert_eq!(r.name, None);
        assert_eq!(r.display_name, "driver42");
    }

    #[test]
    fn empty_payload_is_anonymous() {
        let r = register(None, None);
        assert_eq!(r.display_name, "anonymous");
        assert_eq!(r.email, None);
    }
}
