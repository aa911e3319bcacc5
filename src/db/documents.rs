use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::schema;
use crate::models::EmployeeRecord;

/// Schemaless document store for employee records.
///
/// Each record is serialized to JSON and stored opaquely under a
/// store-assigned `doc_id`; the application enforces no schema on stored
/// documents and never rejects duplicate `employee_id` values. Lookups go
/// through `json_extract` on the document body.
#[derive(Clone)]
pub struct EmployeeStore {
    conn: Arc<Mutex<Connection>>,
}

impl EmployeeStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Store path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "rosterbook")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("directory.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create the document table when absent.
    pub fn setup(&self) -> Result<()> {
        let conn = self.conn.lock().expect("store lock poisoned");
        schema::create_directory_tables(&conn)
    }

    /// Insert one employee document and return the assigned doc id.
    ///
    /// No duplicate check of any kind; inserting the same `employee_id`
    /// twice stores two documents.
    pub fn insert(&self, record: &EmployeeRecord) -> Result<String> {
        let document = serde_json::to_string(record)?;
        let doc_id = Uuid::new_v4().to_string();

        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute(
            "INSERT INTO employees (doc_id, document) VALUES (?, ?)",
            (&doc_id, &document),
        )?;

        Ok(doc_id)
    }

    /// Delete documents matching the given employee id.
    ///
    /// Executes unconditionally; deleting an id that was never stored is
    /// not an error.
    pub fn remove(&self, employee_id: &str) -> Result<()> {
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute(
            "DELETE FROM employees WHERE json_extract(document, '$.employee_id') = ?",
            [employee_id],
        )?;
        Ok(())
    }

    /// Full scan of all stored documents, in insertion order.
    pub fn list(&self) -> Result<Vec<serde_json::Value>> {
        let conn = self.conn.lock().expect("store lock poisoned");
        let mut stmt = conn.prepare("SELECT document FROM employees ORDER BY rowid")?;

        let documents = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<String>, _>>()?;

        documents
            .iter()
            .map(|doc| serde_json::from_str(doc).context("Malformed employee document"))
            .collect()
    }
}
