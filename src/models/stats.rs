use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_products: u64,
    pub total_uploads: u64,
    pub total_activities: u64,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
    #[serde(default)]
    pub products_by_category: HashMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ping {
    pub message: String,
    #[serde(default)]
    pub authenticated: bool,
}
