pub mod grade;
pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Connects to the configured SQLite database.
///
/// `DATABASE_PATH` may be a `sqlite:` DSN or a plain file path, in which case
/// the parent directory is created first.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    if !path_or_url.starts_with("sqlite:") {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }
    let url = database_url(&path_or_url);

    tracing::info!(url = %url, "Connecting to database");
    Database::connect(&url).await
}

/// Turns a configured `DATABASE_PATH` into a SQLite connection string.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:") {
        path_or_url.to_string()
    } else {
        format!("sqlite://{path_or_url}?mode=rwc")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_becomes_read_write_create_url() {
        assert_eq!(
            database_url("data/attendance.db"),
            "sqlite://data/attendance.db?mode=rwc"
        );
    }

    #[test]
    fn sqlite_dsn_is_kept() {
        assert_eq!(database_url("sqlite::memory:"), "sqlite::memory:");
    }
}
