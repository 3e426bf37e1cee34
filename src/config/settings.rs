use std::path::PathBuf;

pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";
pub const DEFAULT_DATABASE_PATH: &str = "tournament.db";

pub struct DatabaseSettings {
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var(DATABASE_PATH_ENV)
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string())
                .into(),
        }
    }
}

pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
        }
    }

    /// Applies a database path given on the command line, which wins over the
    /// environment.
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database.path = path;
        }
        self
    }
}
