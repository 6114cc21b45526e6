use crate::{
    dto::{
        CategoriesResponse, CommentResponse, MessageResponse, NewCommentRequest,
        NewsletterRequest, PostFilterParams, StatsResponse,
    },
    errors::ApiError,
    models::{BlogPost, Comment},
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use tracing::info;
use validator::Validate;

/// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "message": "BlogX API is running!"
    }))
}

/// GET /api/posts?category=Technology&search=ai
///
/// Category is a case-sensitive exact match with "All" as a no-op
/// sentinel; search matches title or excerpt case-insensitively.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostFilterParams>,
) -> Json<Vec<BlogPost>> {
    let posts = state.posts.read();

    let filtered = posts
        .iter()
        .filter(|post| match params.category.as_deref() {
            Some(category) if category != "All" => post.category == category,
            _ => true,
        })
        .filter(|post| match params.search.as_deref() {
            Some(search) => {
                let needle = search.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.excerpt.to_lowercase().contains(&needle)
            }
            None => true,
        })
        .cloned()
        .collect();

    Json(filtered)
}

/// GET /api/posts/{slug}
///
/// Every fetch counts as a view, duplicates included.
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let mut posts = state.posts.write();
    let post = posts
        .iter_mut()
        .find(|post| post.slug == slug)
        .ok_or(ApiError::NotFound)?;

    post.views += 1;

    Ok(Json(post.clone()))
}

/// GET /api/categories
pub async fn get_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.categories.as_ref().clone(),
    })
}

/// POST /api/posts/{post_id}/comments
/// Body: { "author": "...", "content": "..." }
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<u32>,
    Json(payload): Json<NewCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let mut posts = state.posts.write();
    let post = posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or(ApiError::NotFound)?;

    let comment = Comment {
        id: post.comments.len() as u32 + 1,
        author: payload.author,
        content: payload.content,
        published_at: Utc::now().format("%Y-%m-%d").to_string(),
    };

    post.comments.push(comment.clone());

    info!("Comment added to post {}", post_id);

    Ok(Json(CommentResponse {
        message: "Comment added successfully".to_string(),
        comment,
    }))
}

/// POST /api/newsletter
/// Body: { "email": "..." }
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(payload): Json<NewsletterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let mut subscribers = state.subscribers.write();
    if subscribers.contains(&payload.email) {
        return Err(ApiError::AlreadySubscribed);
    }

    info!("Newsletter subscription: {}", payload.email);
    subscribers.push(payload.email);

    Ok(Json(MessageResponse {
        message: "Successfully subscribed to newsletter".to_string(),
    }))
}

/// GET /api/stats
///
/// Aggregates are computed fresh on every call.
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let posts = state.posts.read();

    let total_posts = posts.len();
    let total_views = posts.iter().map(|post| post.views).sum();
    let total_comments = posts.iter().map(|post| post.comments.len()).sum();
    let newsletter_subscribers = state.subscribers.read().len();

    Json(StatsResponse {
        total_posts,
        total_views,
        total_comments,
        newsletter_subscribers,
    })
}
