use std::env;

/// Runtime configuration, resolved once at startup from environment
/// variables with local-development defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database path.
    pub database: String,
    /// Directory uploaded images are stored in and served from.
    pub uploads_dir: String,
    /// Bootstrap super-admin credentials, used only when the admins
    /// table is empty.
    pub seed_admin_email: String,
    pub seed_admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            host: env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("APP_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(8080),
            database: env::var("APP_DATABASE").unwrap_or_else(|_| "subventions.sqlite".to_string()),
            uploads_dir: env::var("APP_UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string()),
            seed_admin_email: env::var("APP_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@portail.ma".to_string()),
            seed_admin_password: env::var("APP_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "changez-moi".to_string()),
        }
    }
}
