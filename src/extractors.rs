//! Reusable request extractors.
//!
//! Each type here implements [`FromRequestParts`], so axum constructs it
//! from the incoming request and hands it to any handler that lists it as
//! an argument. Shared logic like pagination clamping and API key checks
//! lives here once instead of being repeated in every handler.

use crate::error::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use tracing::info;

/// Hard ceiling on `limit` for the shared pagination extractor.
pub const MAX_LIMIT: u64 = 200;

/// Hard ceiling on `limit` for product listings.
pub const PRODUCT_MAX_LIMIT: u64 = 100;

/// API keys accepted by [`ApiKey`]. A real service would look these up in
/// a credential store.
pub const VALID_API_KEYS: [&str; 2] = ["secret-key-123", "test-key-456"];

const DB_CONNECTION_ID: &str = "database_connection_123";

/// Common pagination parameters shared by the item and user listings.
///
/// `skip` defaults to 0 and `limit` to 100; `limit` is clamped to
/// [`MAX_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonParams {
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Deserialize)]
struct RawCommonQuery {
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: u64,
}

fn default_limit() -> u64 {
    100
}

impl CommonParams {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.min(MAX_LIMIT),
        }
    }
}

impl<S> FromRequestParts<S> for CommonParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawCommonQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidQuery(e.to_string()))?;

        let params = CommonParams::new(raw.skip, raw.limit);
        info!(skip = params.skip, limit = params.limit, "Processing paginated request");
        Ok(params)
    }
}

/// Pagination variant used by the product listing, with a lower default
/// and ceiling than [`CommonParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductPage {
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Deserialize)]
struct RawProductQuery {
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_product_limit")]
    limit: u64,
}

fn default_product_limit() -> u64 {
    50
}

impl ProductPage {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.min(PRODUCT_MAX_LIMIT),
        }
    }
}

impl<S> FromRequestParts<S> for ProductPage
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawProductQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidQuery(e.to_string()))?;

        Ok(ProductPage::new(raw.skip, raw.limit))
    }
}

/// Verified API key identity, extracted from the `x-api-key` header.
///
/// Extraction fails with 401 when the header is missing or the key is not
/// in [`VALID_API_KEYS`].
#[derive(Debug, Clone)]
pub struct ApiKey {
    pub api_key: String,
    pub user_id: String,
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if !VALID_API_KEYS.contains(&key) {
            return Err(AppError::Unauthorized);
        }

        Ok(ApiKey {
            api_key: key.to_string(),
            // Could be fetched from a user store keyed by the credential
            user_id: "user-123".to_string(),
        })
    }
}

/// Simulated database connection.
#[derive(Debug, Clone)]
pub struct DbConnection {
    pub connection: String,
}

impl<S> FromRequestParts<S> for DbConnection
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        info!("Acquiring database connection");
        Ok(DbConnection {
            connection: DB_CONNECTION_ID.to_string(),
        })
    }
}

/// Service layer built on top of [`DbConnection`].
///
/// Demonstrates a nested extractor: extracting a `UserService` first runs
/// the `DbConnection` extractor, then wraps its result.
#[derive(Debug, Clone)]
pub struct UserService {
    pub service: String,
}

impl<S> FromRequestParts<S> for UserService
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let db = DbConnection::from_request_parts(parts, state).await?;
        info!("Creating user service over database connection");
        Ok(UserService {
            service: format!("service_with_{}", db.connection),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_for(uri: &str) -> Parts {
        let (parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn limit_above_ceiling_is_clamped() {
        assert_eq!(CommonParams::new(0, 201).limit, 200);
        assert_eq!(CommonParams::new(0, 10_000).limit, 200);
    }

    #[test]
    fn limit_at_or_below_ceiling_is_unchanged() {
        assert_eq!(CommonParams::new(0, 200).limit, 200);
        assert_eq!(CommonParams::new(0, 7).limit, 7);
        assert_eq!(CommonParams::new(0, 0).limit, 0);
    }

    #[test]
    fn product_limit_is_clamped_at_one_hundred() {
        assert_eq!(ProductPage::new(0, 101).limit, 100);
        assert_eq!(ProductPage::new(0, 100).limit, 100);
        assert_eq!(ProductPage::new(0, 30).limit, 30);
    }

    #[tokio::test]
    async fn common_params_defaults() {
        let mut parts = parts_for("/items/");
        let params = CommonParams::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(params, CommonParams { skip: 0, limit: 100 });
    }

    #[tokio::test]
    async fn common_params_from_query_string() {
        let mut parts = parts_for("/items/?skip=5&limit=500");
        let params = CommonParams::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(params, CommonParams { skip: 5, limit: 200 });
    }

    #[tokio::test]
    async fn non_numeric_limit_is_rejected() {
        let mut parts = parts_for("/items/?limit=lots");
        let err = CommonParams::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn product_page_defaults() {
        let mut parts = parts_for("/products/");
        let page = ProductPage::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(page, ProductPage { skip: 0, limit: 50 });
    }

    #[tokio::test]
    async fn both_configured_api_keys_are_accepted() {
        for key in VALID_API_KEYS {
            let (mut parts, _) = Request::builder()
                .uri("/secure-data/")
                .header("x-api-key", key)
                .body(())
                .unwrap()
                .into_parts();
            let auth = ApiKey::from_request_parts(&mut parts, &()).await.unwrap();
            assert_eq!(auth.api_key, key);
            assert_eq!(auth.user_id, "user-123");
        }
    }

    #[tokio::test]
    async fn unknown_api_key_is_rejected() {
        let (mut parts, _) = Request::builder()
            .uri("/secure-data/")
            .header("x-api-key", "secret-key-124")
            .body(())
            .unwrap()
            .into_parts();
        let err = ApiKey::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn missing_api_key_is_rejected() {
        let mut parts = parts_for("/secure-data/");
        let err = ApiKey::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn nested_service_chain_is_deterministic() {
        let mut parts = parts_for("/user-stats/");
        let service = UserService::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(service.service, "service_with_database_connection_123");
    }
}
