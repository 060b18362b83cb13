use axum::{routing::get, Router};

use crate::{coaching::coaching_controller::coaching_router, health::health_controller};

pub fn application_router() -> Router {
    Router::new()
        .route("/api/health", get(health_controller::health))
        .merge(coaching_router())
}
