use serde::{Deserialize, Serialize};

/// A registered account as persisted in the user store, keyed by email.
/// The password hash serializes with the record; API responses go through
/// `UserResponse` instead, which never carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "hashed_password")]
    pub hashed_password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub join_date: String,
    pub is_active: bool,
}
