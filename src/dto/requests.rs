use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,
    #[validate(length(min = 8, max = 100, message = "Password must be 8-100 characters"))]
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    #[validate(length(min = 8, max = 100, message = "Password must be 8-100 characters"))]
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteToggleRequest {
    pub post_id: u32,
}

#[derive(Debug, Validate, Deserialize)]
pub struct NewCommentRequest {
    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: String,
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct NewsletterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Query parameters for the post listing; both filters compose with AND.
#[derive(Debug, Default, Deserialize)]
pub struct PostFilterParams {
    pub category: Option<String>,
    pub search: Option<String>,
}
