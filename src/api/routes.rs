use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::map_response,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::models::{Brands, CarColors, Cars, Colors, Models};
use crate::database::repository::Repository;
use crate::database::resource::Resource;
use crate::database::DatabaseManager;
use crate::handlers::{register, resource, service};
use crate::middleware::{method_not_allowed_body, route_not_found};

/// Mount points of the catalog resources, in registration order
pub const RESOURCE_PATHS: [&str; 5] = [
    Brands::PATH,
    Models::PATH,
    CarColors::PATH,
    Cars::PATH,
    Colors::PATH,
];

/// Every route the service answers, with repositories bound to `db`'s pool
pub fn create_router(db: DatabaseManager, config: &AppConfig) -> Router {
    let app = Router::new()
        .merge(service_routes(db.clone()))
        .merge(catalog_routes(&db))
        .merge(register_routes())
        .fallback(route_not_found)
        .layer(map_response(method_not_allowed_body))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    let app = match cors_layer(config) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    if config.api.enable_request_logging {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

fn service_routes(db: DatabaseManager) -> Router {
    Router::new()
        .route("/", get(service::root))
        .route("/health", get(service::health))
        .with_state(db)
}

fn catalog_routes(db: &DatabaseManager) -> Router {
    let pool = db.pool();

    Router::new()
        .merge(resource::routes(Repository::<Brands>::new(pool.clone()).into_store()))
        .merge(resource::routes(Repository::<Models>::new(pool.clone()).into_store()))
        .merge(resource::routes(Repository::<CarColors>::new(pool.clone()).into_store()))
        .merge(resource::routes(Repository::<Cars>::new(pool.clone()).into_store()))
        .merge(resource::routes(Repository::<Colors>::new(pool.clone()).into_store()))
}

fn register_routes() -> Router {
    Router::new().route("/register", post(register::register_post))
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }
    if config.security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
