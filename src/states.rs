use crate::{
    config::Config,
    errors::ApiError,
    models::{BlogPost, User},
    seed, store,
};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};
use tracing::warn;

/// Shared application state, constructed once at startup and cloned into
/// every handler via axum `State`.
///
/// Keyed stores (users, favorites) live in `DashMap`s and are mirrored to
/// JSON files on every mutation; posts and subscribers are ordered
/// collections behind an `RwLock` and exist only in memory.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<DashMap<String, User>>,
    pub favorites: Arc<DashMap<String, Vec<u32>>>,
    pub posts: Arc<RwLock<Vec<BlogPost>>>,
    pub subscribers: Arc<RwLock<Vec<String>>>,
    pub categories: Arc<Vec<String>>,
    next_user_id: Arc<AtomicU32>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let users_path = config.users_path();
        let users: DashMap<String, User> = match store::load_store(&users_path) {
            Some(users) => users,
            None => {
                // First run: seed the demo account and write the store
                let users = seed::seed_users();
                if let Err(e) = store::save_store(&users_path, &users) {
                    warn!("Failed to write initial user store: {}", e);
                }
                users
            }
        };

        let favorites: DashMap<String, Vec<u32>> =
            store::load_store(&config.favorites_path()).unwrap_or_default();

        // Ids stay monotonic across restarts even if records were ever removed
        let next_user_id = users.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;

        Self {
            users: Arc::new(users),
            favorites: Arc::new(favorites),
            posts: Arc::new(RwLock::new(seed::seed_posts())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            categories: Arc::new(seed::seed_categories()),
            next_user_id: Arc::new(AtomicU32::new(next_user_id)),
            config: Arc::new(config),
        }
    }

    pub fn allocate_user_id(&self) -> u32 {
        self.next_user_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Full-file rewrite of `users.json`. A failure here leaves the
    /// in-memory store ahead of the file.
    pub fn persist_users(&self) -> Result<(), ApiError> {
        store::save_store(&self.config.users_path(), &*self.users)
            .map_err(|e| ApiError::InternalError(format!("Failed to write user store: {}", e)))
    }

    /// Full-file rewrite of `favorites.json`.
    pub fn persist_favorites(&self) -> Result<(), ApiError> {
        store::save_store(&self.config.favorites_path(), &*self.favorites)
            .map_err(|e| ApiError::InternalError(format!("Failed to write favorites store: {}", e)))
    }
}
