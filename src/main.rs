use axum::http::Method;
use extractor_demo::observability::{init_tracing, AppMetrics};
use extractor_demo::routes::create_router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let metrics = Arc::new(AppMetrics::new());
    let app = create_router(metrics).layer(cors);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);
    info!("Endpoint listing: http://{}/", addr);
    info!("Secure endpoint (x-api-key header): http://{}/secure-data/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
