use crate::{
    auth,
    dto::{FavoriteStatusResponse, FavoriteToggleRequest, FavoriteToggleResponse},
    errors::ApiError,
    models::BlogPost,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use tracing::info;

/// POST /api/favorites/toggle
/// Headers: Authorization: Bearer <token>
/// Body: { "post_id": 1 }
pub async fn toggle_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FavoriteToggleRequest>,
) -> Result<Json<FavoriteToggleResponse>, ApiError> {
    let user = auth::current_user(&state, &headers)?;
    let post_id = payload.post_id;

    let mut entry = state.favorites.entry(user.email.clone()).or_default();
    let is_favorite = if let Some(pos) = entry.iter().position(|id| *id == post_id) {
        entry.remove(pos);
        false
    } else {
        entry.push(post_id);
        true
    };
    // Release the shard before the store is serialized
    drop(entry);

    state.persist_favorites()?;

    let message = if is_favorite {
        "Post added to favorites"
    } else {
        "Post removed from favorites"
    };

    info!(
        "Favorite toggled - user: {}, post: {}, favorite: {}",
        user.email, post_id, is_favorite
    );

    Ok(Json(FavoriteToggleResponse {
        message: message.to_string(),
        is_favorite,
        post_id,
    }))
}

/// GET /api/favorites
/// Headers: Authorization: Bearer <token>
///
/// Returns the caller's favorite posts in post seed order, not the order
/// they were favorited in.
pub async fn list_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let user = auth::current_user(&state, &headers)?;

    let favorite_ids = state
        .favorites
        .get(&user.email)
        .map(|ids| ids.clone())
        .unwrap_or_default();

    let posts = state.posts.read();
    let favorites = posts
        .iter()
        .filter(|post| favorite_ids.contains(&post.id))
        .cloned()
        .collect();

    Ok(Json(favorites))
}

/// GET /api/favorites/check/{post_id}
/// Headers: Authorization: Bearer <token>
pub async fn check_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(post_id): Path<u32>,
) -> Result<Json<FavoriteStatusResponse>, ApiError> {
    let user = auth::current_user(&state, &headers)?;

    let is_favorite = state
        .favorites
        .get(&user.email)
        .map(|ids| ids.contains(&post_id))
        .unwrap_or(false);

    Ok(Json(FavoriteStatusResponse {
        post_id,
        is_favorite,
    }))
}
