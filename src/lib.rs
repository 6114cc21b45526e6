//! Blog backend REST API: posts, comments, categories, newsletter,
//! authentication, profiles and per-user favorites. User and favorite
//! data persist to flat JSON files; everything else lives in memory.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod seed;
pub mod states;
pub mod store;

pub use states::AppState;

pub fn app(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = config::ALLOWED_ORIGINS
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let uploads = ServeDir::new(state.config.upload_dir.clone());

    Router::new()
        // Public routes
        .route("/", get(routes::blog::root))
        .route("/api/auth/register", post(routes::user::register))
        .route("/api/auth/login", post(routes::user::login))
        .route("/api/posts", get(routes::blog::list_posts))
        .route("/api/posts/{slug}", get(routes::blog::get_post))
        .route("/api/posts/{slug}/comments", post(routes::blog::add_comment))
        .route("/api/categories", get(routes::blog::get_categories))
        .route("/api/newsletter", post(routes::blog::subscribe_newsletter))
        .route("/api/stats", get(routes::blog::get_stats))
        // Protected routes (auth required)
        .route("/api/auth/me", get(routes::user::me))
        .route("/api/auth/profile", put(routes::user::update_profile))
        .route(
            "/api/auth/change-password",
            put(routes::user::change_password),
        )
        .route(
            "/api/auth/upload-avatar",
            // Oversized bodies are buffered and rejected by the handler's
            // own size check rather than cut off by the framework limit
            post(routes::user::upload_avatar).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/api/favorites/toggle",
            post(routes::favorites::toggle_favorite),
        )
        .route("/api/favorites", get(routes::favorites::list_favorites))
        .route(
            "/api/favorites/check/{post_id}",
            get(routes::favorites::check_favorite),
        )
        // Static serving of uploaded avatars
        .nest_service("/uploads", uploads)
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
