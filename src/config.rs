use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::warn;

/// Origins allowed by the CORS layer (local frontend dev servers).
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

const DEV_JWT_SECRET: &str = "dev-only-secret-change-in-production";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    /// Directory holding `users.json` and `favorites.json`.
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    /// Base URL uploaded avatars are served under.
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port: u16 = try_load("PORT", "8000");
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using development default");
            DEV_JWT_SECRET.to_string()
        });
        let public_url =
            env::var("PUBLIC_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));

        Self {
            port,
            jwt_secret,
            data_dir: try_load("DATA_DIR", "."),
            upload_dir: try_load("UPLOAD_DIR", "uploads"),
            public_url,
        }
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir.join("favorites.json")
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
