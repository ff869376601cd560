// src-tauri/src/db.rs
use crate::error::{ConfigError, StorageError};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DB_FILE_NAME: &str = "recipe_box.db";

// Default database location: next to the running executable
pub fn default_db_path() -> Result<PathBuf, ConfigError> {
    let exe_path = env::current_exe()?;
    let exe_dir = exe_path
        .parent()
        .ok_or_else(|| ConfigError::NoParentDirectory(exe_path.clone()))?;
    Ok(exe_dir.join(DB_FILE_NAME))
}

// Opens (creating if needed) the database file and its parent directory
pub fn init_connection(db_path: &Path) -> Result<Connection, StorageError> {
    if let Some(dir) = db_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                StorageError::Unavailable(format!(
                    "Failed to create directory for database '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
    }
    info!(path = %db_path.display(), "opening database");
    Ok(Connection::open(db_path)?)
}

// Creates the necessary tables if they don't exist
pub fn init_db_tables(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS key_value_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_connection_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(DB_FILE_NAME);

        let conn = init_connection(&path).unwrap();
        init_db_tables(&conn).unwrap();
        // Running twice is harmless
        init_db_tables(&conn).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn default_path_sits_beside_the_executable() {
        let path = default_db_path().unwrap();
        assert_eq!(path.file_name().unwrap(), DB_FILE_NAME);
        let exe = env::current_exe().unwrap();
        assert_eq!(path.parent(), exe.parent());
    }
}
