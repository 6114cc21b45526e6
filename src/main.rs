use blogx_api::{app, config::Config, states::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    std::fs::create_dir_all(&config.data_dir).expect("Failed to create data directory");
    std::fs::create_dir_all(&config.upload_dir).expect("Failed to create upload directory");

    let state = AppState::new(config);
    let addr = format!("0.0.0.0:{}", state.config.port);

    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  POST   /api/auth/register          - Create account");
    info!("  POST   /api/auth/login             - Login");
    info!("  GET    /api/auth/me                - Current user (auth)");
    info!("  PUT    /api/auth/profile           - Update profile (auth)");
    info!("  PUT    /api/auth/change-password   - Change password (auth)");
    info!("  POST   /api/auth/upload-avatar     - Upload avatar (auth)");
    info!("  POST   /api/favorites/toggle       - Toggle favorite (auth)");
    info!("  GET    /api/favorites              - List favorites (auth)");
    info!("  GET    /api/favorites/check/:id    - Check favorite (auth)");
    info!("  GET    /api/posts                  - List posts (filterable)");
    info!("  GET    /api/posts/:slug            - Get post by slug");
    info!("  POST   /api/posts/:id/comments     - Add comment");
    info!("  GET    /api/categories             - List categories");
    info!("  POST   /api/newsletter             - Subscribe");
    info!("  GET    /api/stats                  - Blog statistics");

    axum::serve(listener, router).await.unwrap();
}
