use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::info;

/// Application health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthChecks {
    pub api: String,
    pub auth: String,
}

/// Application metrics
#[derive(Debug, Clone)]
pub struct AppMetrics {
    pub start_time: Instant,
    pub total_requests: Arc<RwLock<u64>>,
    pub successful_requests: Arc<RwLock<u64>>,
    pub failed_requests: Arc<RwLock<u64>>,
    pub auth_failures: Arc<RwLock<u64>>,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            total_requests: Arc::new(RwLock::new(0)),
            successful_requests: Arc::new(RwLock::new(0)),
            failed_requests: Arc::new(RwLock::new(0)),
            auth_failures: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn increment_requests(&self) {
        *self.total_requests.write().await += 1;
    }

    pub async fn increment_success(&self) {
        *self.successful_requests.write().await += 1;
    }

    pub async fn increment_failure(&self) {
        *self.failed_requests.write().await += 1;
    }

    pub async fn increment_auth_failure(&self) {
        *self.auth_failures.write().await += 1;
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check endpoint handler
pub async fn health_handler(State(metrics): State<Arc<AppMetrics>>) -> impl IntoResponse {
    let uptime = metrics.uptime_seconds();

    let health = HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        checks: HealthChecks {
            api: "ok".to_string(),
            auth: "ok".to_string(),
        },
    };

    info!(
        "Health check requested - status: healthy, uptime: {}s",
        uptime
    );
    (StatusCode::OK, Json(health))
}

/// Metrics endpoint handler
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub uptime_seconds: u64,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub auth_failures: u64,
    pub success_rate: f64,
}

pub async fn metrics_handler(State(metrics): State<Arc<AppMetrics>>) -> impl IntoResponse {
    let uptime = metrics.uptime_seconds();
    let total = *metrics.total_requests.read().await;
    let success = *metrics.successful_requests.read().await;
    let failed = *metrics.failed_requests.read().await;
    let auth_failures = *metrics.auth_failures.read().await;

    let success_rate = if total > 0 {
        (success as f64 / total as f64) * 100.0
    } else {
        100.0
    };

    let response = MetricsResponse {
        uptime_seconds: uptime,
        total_requests: total,
        successful_requests: success,
        failed_requests: failed,
        auth_failures,
        success_rate,
    };

    (StatusCode::OK, Json(response))
}

/// Initialize tracing subscriber for structured logging
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "extractor_demo=info,tower_http=info".to_string());

    let filter_clone = filter.clone();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .json()
        .init();

    info!("Tracing initialized with filter: {}", filter_clone);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counters_start_at_zero() {
        let metrics = AppMetrics::new();
        assert_eq!(*metrics.total_requests.read().await, 0);
        assert_eq!(*metrics.auth_failures.read().await, 0);
    }

    #[tokio::test]
    async fn counters_accumulate() {
        let metrics = AppMetrics::new();
        metrics.increment_requests().await;
        metrics.increment_requests().await;
        metrics.increment_success().await;
        metrics.increment_auth_failure().await;
        assert_eq!(*metrics.total_requests.read().await, 2);
        assert_eq!(*metrics.successful_requests.read().await, 1);
        assert_eq!(*metrics.auth_failures.read().await, 1);
    }
}
