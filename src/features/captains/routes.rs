use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::captains::handlers;
use crate::features::captains::services::CaptainService;

/// Create routes for the captains feature
pub fn routes(service: Arc<CaptainService>) -> Router {
    Router::new()
        .route("/captains/register", post(handlers::register_captain))
        .route("/captains/{id}", get(handlers::get_captain))
        .with_state(service)
}
