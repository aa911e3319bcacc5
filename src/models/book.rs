use serde::{Deserialize, Serialize};

/// A persisted book row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub book_id: i64,
    pub book_title: String,
    pub book_author: String,
    pub publication_year: i64,
}

/// Input for adding or updating a book. Field names are the public wire
/// format and differ from the column names on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookInput {
    pub title_of_book: String,
    pub author_of_book: String,
    pub year_of_publication: i64,
}

/// A persisted review row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub book_id: i64,
    pub review_text: String,
    pub review_rating: i64,
}

/// Input for adding a review. The rating range is unchecked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReviewInput {
    pub review_text: String,
    pub review_rating: i64,
}

/// Optional equality filters for listing books, combined with AND only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookFilter {
    pub author: Option<String>,
    pub publication_year: Option<i64>,
}

/// Outcome of the catalog self-test endpoint: either an overall success
/// message or the first failure with the offending response attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SelfTestReport {
    pub fn passed() -> Self {
        Self {
            message: Some("All book-related tests passed successfully".to_string()),
            error: None,
            details: None,
        }
    }

    pub fn failed(error: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
            details: Some(details),
        }
    }
}
