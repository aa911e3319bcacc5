mod documents;
mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{Book, BookFilter, NewBookInput, NewReviewInput, Review};

pub use documents::EmployeeStore;

/// SQLite-backed store for the catalog service.
///
/// One shared connection behind a lock; no transaction ever spans more
/// than a single statement.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
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
        let db_path = dirs.data_dir().join("catalog.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create the books and reviews tables when absent.
    pub fn setup(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::create_catalog_tables(&conn)
    }

    // ============================================================
    // Book operations
    // ============================================================

    /// Insert one book row and return the generated id.
    pub fn insert_book(&self, input: &NewBookInput) -> Result<i64> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO books (book_title, book_author, publication_year) VALUES (?, ?, ?)",
            (
                &input.title_of_book,
                &input.author_of_book,
                input.year_of_publication,
            ),
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn get_book(&self, book_id: i64) -> Result<Option<Book>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT book_id, book_title, book_author, publication_year
             FROM books WHERE book_id = ?",
        )?;

        let mut rows = stmt.query([book_id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Book {
                book_id: row.get(0)?,
                book_title: row.get(1)?,
                book_author: row.get(2)?,
                publication_year: row.get(3)?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Full scan with optional equality filters, combined with AND only.
    /// Filter values are bound as parameters, never spliced into the SQL.
    pub fn list_books(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        let conn = self.conn.lock().expect("database lock poisoned");

        let mut sql =
            String::from("SELECT book_id, book_title, book_author, publication_year FROM books");
        let mut clauses = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(author) = &filter.author {
            clauses.push("book_author = ?");
            params.push(Box::new(author.clone()));
        }
        if let Some(year) = filter.publication_year {
            clauses.push("publication_year = ?");
            params.push(Box::new(year));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let mut stmt = conn.prepare(&sql)?;
        let params_ref: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let books = stmt
            .query_map(params_ref.as_slice(), |row| {
                Ok(Book {
                    book_id: row.get(0)?,
                    book_title: row.get(1)?,
                    book_author: row.get(2)?,
                    publication_year: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }

    /// Unconditional update by id. Updating an id that does not exist
    /// changes nothing and still succeeds.
    pub fn update_book(&self, book_id: i64, input: &NewBookInput) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "UPDATE books SET book_title = ?, book_author = ?, publication_year = ? WHERE book_id = ?",
            (
                &input.title_of_book,
                &input.author_of_book,
                input.year_of_publication,
                book_id,
            ),
        )?;
        Ok(())
    }

    // ============================================================
    // Review operations
    // ============================================================

    /// Insert one review row and return the generated id. Parent existence
    /// is the caller's concern; no foreign key backs `book_id`.
    pub fn insert_review(&self, book_id: i64, input: &NewReviewInput) -> Result<i64> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO reviews (book_id, review_text, review_rating) VALUES (?, ?, ?)",
            (book_id, &input.review_text, input.review_rating),
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Full scan of reviews filtered by parent book id.
    pub fn reviews_for_book(&self, book_id: i64) -> Result<Vec<Review>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT review_id, book_id, review_text, review_rating
             FROM reviews WHERE book_id = ?",
        )?;

        let reviews = stmt
            .query_map([book_id], |row| {
                Ok(Review {
                    review_id: row.get(0)?,
                    book_id: row.get(1)?,
                    review_text: row.get(2)?,
                    review_rating: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(reviews)
    }

    // ============================================================
    // Generic entry deletion
    // ============================================================

    /// Delete a row from the `records` table by entry id.
    ///
    /// No setup path creates a `records` table, so this statement fails
    /// at the storage layer every time it runs.
    pub fn delete_entry(&self, entry_id: i64) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute("DELETE FROM records WHERE entry_id = ?", [entry_id])?;
        Ok(())
    }
}
