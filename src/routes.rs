use crate::handlers::{
    get_secure_data, get_user_stats, read_items, read_products, read_users, root_handler,
};
use crate::observability::{health_handler, metrics_handler, AppMetrics};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(metrics: Arc<AppMetrics>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/items/", get(read_items))
        .route("/users/", get(read_users))
        .route("/products/", get(read_products))
        .route("/secure-data/", get(get_secure_data))
        .route("/user-stats/", get(get_user_stats))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(metrics)
}
