use crate::models::{Comment, User};
use serde::Serialize;

/// Public view of an account; never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub join_date: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            avatar: user.avatar.clone(),
            join_date: user.join_date.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct AvatarResponse {
    pub message: String,
    pub avatar_url: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    pub message: String,
    pub is_favorite: bool,
    pub post_id: u32,
}

#[derive(Debug, Serialize)]
pub struct FavoriteStatusResponse {
    pub post_id: u32,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub message: String,
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_posts: usize,
    pub total_views: u64,
    pub total_comments: usize,
    pub newsletter_subscribers: usize,
}
