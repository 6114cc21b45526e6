use crate::{
    auth,
    dto::{
        AuthResponse, AvatarResponse, ChangePasswordRequest, LoginRequest, MessageResponse,
        ProfileResponse, RegisterRequest, UpdateProfileRequest, UserResponse,
    },
    errors::ApiError,
    models::User,
    states::AppState,
};
use axum::{
    Json,
    extract::{Multipart, State},
    http::HeaderMap,
};
use chrono::{Duration, Utc};
use std::fs;
use tracing::info;
use validator::Validate;

const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

/// POST /api/auth/register
/// Body: { "email": "...", "firstName": "...", "lastName": "...", "password": "..." }
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    if state.users.contains_key(&payload.email) {
        return Err(ApiError::EmailTaken);
    }

    let hashed_password = auth::hash_password(&payload.password)?;

    let user = User {
        id: state.allocate_user_id(),
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
        hashed_password,
        phone: payload.phone,
        avatar: None,
        join_date: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        is_active: true,
    };

    let token = auth::create_token(
        &user.email,
        &state.config.jwt_secret,
        Some(Duration::minutes(auth::ACCESS_TOKEN_TTL_MINUTES)),
    )?;

    state.users.insert(user.email.clone(), user.clone());
    state.persist_users()?;

    info!("New user registered: {}", user.email);

    Ok(Json(AuthResponse {
        message: Some("User registered successfully".to_string()),
        access_token: token,
        token_type: "bearer".to_string(),
        user: UserResponse::from(&user),
    }))
}

/// POST /api/auth/login
/// Body: { "email": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let user = state
        .users
        .get(&payload.email)
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = auth::verify_password(&payload.password, &user.hashed_password)?;
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    let token = auth::create_token(
        &user.email,
        &state.config.jwt_secret,
        Some(Duration::minutes(auth::ACCESS_TOKEN_TTL_MINUTES)),
    )?;

    info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        message: None,
        access_token: token,
        token_type: "bearer".to_string(),
        user: UserResponse::from(&*user),
    }))
}

/// GET /api/auth/me
/// Headers: Authorization: Bearer <token>
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let user = auth::current_user(&state, &headers)?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/auth/profile
/// Headers: Authorization: Bearer <token>
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let user = auth::current_user(&state, &headers)?;

    if payload.email != user.email && state.users.contains_key(&payload.email) {
        return Err(ApiError::EmailTaken);
    }

    let old_email = user.email.clone();
    let mut updated = user;
    updated.first_name = payload.first_name;
    updated.last_name = payload.last_name;
    updated.email = payload.email;
    updated.phone = payload.phone;

    // On an email change the record moves to its new key
    if updated.email != old_email {
        state.users.remove(&old_email);
    }
    state.users.insert(updated.email.clone(), updated.clone());
    state.persist_users()?;

    info!("Profile updated: {}", updated.email);

    Ok(Json(ProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: UserResponse::from(&updated),
    }))
}

/// PUT /api/auth/change-password
/// Headers: Authorization: Bearer <token>
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let user = auth::current_user(&state, &headers)?;

    let valid = auth::verify_password(&payload.current_password, &user.hashed_password)?;
    if !valid {
        return Err(ApiError::BadRequest(
            "Current password is incorrect".to_string(),
        ));
    }

    let new_hash = auth::hash_password(&payload.new_password)?;
    if let Some(mut entry) = state.users.get_mut(&user.email) {
        entry.hashed_password = new_hash;
    }
    state.persist_users()?;

    info!("Password changed: {}", user.email);

    Ok(Json(MessageResponse {
        message: "Password changed successfully".to_string(),
    }))
}

/// POST /api/auth/upload-avatar
/// Headers: Authorization: Bearer <token>
/// Body: multipart form with a single image file part
pub async fn upload_avatar(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<AvatarResponse>, ApiError> {
    let user = auth::current_user(&state, &headers)?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
        .ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let content_type = field
        .content_type()
        .map(str::to_string)
        .ok_or_else(|| ApiError::BadRequest("Missing file content type".to_string()))?;
    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(ApiError::BadRequest(
            "Only JPEG, PNG, GIF and WebP formats are supported".to_string(),
        ));
    }

    let file_name = field.file_name().unwrap_or("avatar").to_string();

    // The whole part is buffered before the size check
    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
    if data.len() > MAX_AVATAR_BYTES {
        return Err(ApiError::BadRequest(
            "File size cannot exceed 5MB".to_string(),
        ));
    }

    let extension = file_name.rsplit('.').next().unwrap_or("img");
    let unique_name = format!("avatar_{}_{}.{}", user.id, Utc::now().timestamp(), extension);
    let file_path = state.config.upload_dir.join(&unique_name);

    fs::write(&file_path, &data)
        .map_err(|e| ApiError::InternalError(format!("Failed to store avatar: {}", e)))?;

    let avatar_url = format!("{}/uploads/{}", state.config.public_url, unique_name);

    if let Some(mut entry) = state.users.get_mut(&user.email) {
        entry.avatar = Some(avatar_url.clone());
    }
    state.persist_users()?;

    info!("Avatar uploaded: {}", user.email);

    Ok(Json(AvatarResponse {
        message: "Avatar uploaded successfully".to_string(),
        avatar_url,
    }))
}
