use crate::error::{AppError, AppResult};
use crate::extractors::{ApiKey, CommonParams, ProductPage, UserService};
use crate::observability::AppMetrics;
use crate::types::{
    Item, ItemListing, PageParams, Product, ProductListing, SecureData, ServiceInfo, User,
    UserListing, UserStats, UserStatsResponse,
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

/// Root endpoint listing the available routes.
pub async fn root_handler(State(metrics): State<Arc<AppMetrics>>) -> Json<ServiceInfo> {
    metrics.increment_requests().await;
    metrics.increment_success().await;

    Json(ServiceInfo {
        message: "Reusable extractor demo".to_string(),
        endpoints: vec![
            "/items/?skip=0&limit=10".to_string(),
            "/users/?skip=5&limit=20".to_string(),
            "/products/?skip=10&limit=30".to_string(),
            "/secure-data/ (requires x-api-key header)".to_string(),
            "/user-stats/".to_string(),
            "/health".to_string(),
            "/metrics".to_string(),
        ],
    })
}

/// List items with pagination supplied by the shared [`CommonParams`]
/// extractor.
pub async fn read_items(
    State(metrics): State<Arc<AppMetrics>>,
    commons: CommonParams,
) -> Json<ItemListing> {
    metrics.increment_requests().await;

    // Simulated database fetch; saturate so huge skip values yield an
    // empty page instead of overflowing
    let items = (commons.skip..commons.skip.saturating_add(commons.limit))
        .map(|i| Item {
            id: i,
            name: format!("Item {}", i),
        })
        .collect();

    metrics.increment_success().await;
    Json(ItemListing {
        message: "Listing items".to_string(),
        params: PageParams {
            skip: commons.skip,
            limit: commons.limit,
        },
        items,
    })
}

/// List users, reusing the same pagination extractor as the item listing.
pub async fn read_users(
    State(metrics): State<Arc<AppMetrics>>,
    commons: CommonParams,
) -> Json<UserListing> {
    metrics.increment_requests().await;

    let users = (commons.skip..commons.skip.saturating_add(commons.limit))
        .map(|i| User {
            id: i,
            name: format!("User {}", i),
        })
        .collect();

    metrics.increment_success().await;
    Json(UserListing {
        message: "Listing users".to_string(),
        params: PageParams {
            skip: commons.skip,
            limit: commons.limit,
        },
        users,
    })
}

/// List products using the struct-based pagination variant with its own
/// defaults and ceiling.
pub async fn read_products(
    State(metrics): State<Arc<AppMetrics>>,
    pagination: ProductPage,
) -> Json<ProductListing> {
    metrics.increment_requests().await;

    let products = (pagination.skip..pagination.skip.saturating_add(pagination.limit))
        .map(|i| Product {
            id: i,
            name: format!("Product {}", i),
        })
        .collect();

    metrics.increment_success().await;
    Json(ProductListing {
        message: "Listing products".to_string(),
        skip: pagination.skip,
        limit: pagination.limit,
        products,
    })
}

/// Endpoint guarded by the [`ApiKey`] extractor. The handler receives the
/// extraction result so rejected requests are still counted.
pub async fn get_secure_data(
    State(metrics): State<Arc<AppMetrics>>,
    auth: Result<ApiKey, AppError>,
) -> AppResult<Json<SecureData>> {
    metrics.increment_requests().await;

    let auth = match auth {
        Ok(auth) => auth,
        Err(e) => {
            metrics.increment_failure().await;
            metrics.increment_auth_failure().await;
            return Err(e);
        }
    };

    info!(user_id = %auth.user_id, "Access granted to secure data");
    metrics.increment_success().await;
    Ok(Json(SecureData {
        message: "Access granted to secure data".to_string(),
        user_id: auth.user_id,
        data: vec![
            "secret1".to_string(),
            "secret2".to_string(),
            "secret3".to_string(),
        ],
    }))
}

/// Endpoint whose [`UserService`] dependency is itself built from the
/// [`crate::extractors::DbConnection`] extractor.
pub async fn get_user_stats(
    State(metrics): State<Arc<AppMetrics>>,
    service: UserService,
) -> Json<UserStatsResponse> {
    metrics.increment_requests().await;
    metrics.increment_success().await;

    Json(UserStatsResponse {
        message: "User statistics".to_string(),
        service_used: service.service,
        stats: UserStats {
            active_users: 150,
            new_users: 25,
        },
    })
}
