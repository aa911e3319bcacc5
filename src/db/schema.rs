use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create the catalog tables when absent. Safe to run on every startup.
///
/// The delete-entry endpoint issues a statement against a `records` table
/// that no setup path creates, so that operation fails at the storage
/// layer by construction.
pub fn create_catalog_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS books (
            book_id INTEGER PRIMARY KEY,
            book_title TEXT NOT NULL,
            book_author TEXT NOT NULL,
            publication_year INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS reviews (
            review_id INTEGER PRIMARY KEY,
            book_id INTEGER NOT NULL,
            review_text TEXT NOT NULL,
            review_rating INTEGER NOT NULL
        );",
    )
    .context("Failed to create catalog tables")
}

/// Create the employee document table when absent.
///
/// The `document` column is opaque JSON; no schema is enforced on it.
pub fn create_directory_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS employees (
            doc_id TEXT PRIMARY KEY,
            document TEXT NOT NULL
        );",
    )
    .context("Failed to create employee document table")
}
