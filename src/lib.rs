use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

pub mod ambient;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod mcp;
pub mod storage;

use ambient::{Clock, Randomness};
use storage::SubmissionStore;

#[derive(Clone)]
pub struct AppState {
    pub site_dir: Arc<Path>,
    pub store: Arc<dyn SubmissionStore>,
    pub clock: Arc<dyn Clock>,
    pub randomness: Arc<dyn Randomness>,
}

impl AppState {
    pub fn new(
        site_dir: PathBuf,
        store: Arc<dyn SubmissionStore>,
        clock: Arc<dyn Clock>,
        randomness: Arc<dyn Randomness>,
    ) -> Self {
        Self {
            site_dir: Arc::from(site_dir),
            store,
            clock,
            randomness,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/heartbeat", get(http::handlers::heartbeat))
        .route("/quote", get(http::handlers::quote))
        .route("/join", post(http::handlers::submit_join))
        .route("/request", post(http::handlers::submit_request))
        .fallback(http::handlers::api_not_found);

    Router::new()
        .route("/mcp", post(http::handlers::mcp_endpoint))
        .nest("/api", api)
        .fallback(http::static_files::serve_site)
        .layer(RequestBodyLimitLayer::new(config::MAX_BODY_BYTES))
        .layer(cors_layer())
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
