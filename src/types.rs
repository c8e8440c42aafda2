use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: u64,
    /// Display name
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
}

/// Pagination echo included in listing responses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageParams {
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemListing {
    pub message: String,
    pub params: PageParams,
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserListing {
    pub message: String,
    pub params: PageParams,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListing {
    pub message: String,
    pub skip: u64,
    pub limit: u64,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SecureData {
    pub message: String,
    pub user_id: String,
    pub data: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserStats {
    /// Currently active users
    pub active_users: u64,
    /// Users created in the last reporting window
    pub new_users: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub message: String,
    pub service_used: String,
    pub stats: UserStats,
}

/// Banner returned by the root endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub endpoints: Vec<String>,
}
