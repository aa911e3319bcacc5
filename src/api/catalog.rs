use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::db::Database;
use crate::models::{Book, BookFilter, NewBookInput, NewReviewInput, Review, SelfTestReport};
use crate::{notify, selftest};

/// Shared state for the catalog service.
///
/// `base_url` is the address the service itself is reachable at; the
/// self-test endpoint drives its own HTTP surface through it.
#[derive(Clone)]
pub struct CatalogState {
    pub db: Database,
    pub base_url: String,
}

// ============================================================
// Books
// ============================================================

pub async fn add_book(
    State(state): State<CatalogState>,
    Json(input): Json<NewBookInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let book_id = state.db.insert_book(&input)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "The book has been successfully added to the database",
            "book_id": book_id
        })),
    ))
}

pub async fn list_books(
    State(state): State<CatalogState>,
    Query(filter): Query<BookFilter>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.db.list_books(&filter)?))
}

/// Unconditional update; an id that does not exist still reports success.
pub async fn update_book(
    State(state): State<CatalogState>,
    Path(book_id): Path<i64>,
    Json(input): Json<NewBookInput>,
) -> Result<Json<Value>, ApiError> {
    state.db.update_book(book_id, &input)?;
    Ok(Json(json!({
        "message": "The details of the specified book have been successfully updated"
    })))
}

// ============================================================
// Reviews
// ============================================================

pub async fn add_review(
    State(state): State<CatalogState>,
    Path(book_id): Path<i64>,
    Json(input): Json<NewReviewInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.db.get_book(book_id)?.ok_or_else(|| {
        ApiError::NotFound("The specified book does not exist in the database".to_string())
    })?;

    state.db.insert_review(book_id, &input)?;
    notify::schedule_confirmation_email(book_id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "The review has been successfully added for the specified book"
        })),
    ))
}

/// An empty result is reported as NotFound rather than an empty list,
/// conflating "no reviews yet" with "no such book".
pub async fn list_reviews(
    State(state): State<CatalogState>,
    Path(book_id): Path<i64>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.db.reviews_for_book(book_id)?;
    if reviews.is_empty() {
        return Err(ApiError::NotFound(
            "No reviews found for this book".to_string(),
        ));
    }
    Ok(Json(reviews))
}

// ============================================================
// Generic entry deletion
// ============================================================

/// Targets a table no setup path creates; the storage layer rejects the
/// statement every time, so this surfaces as a generic server error.
pub async fn delete_entry(
    State(state): State<CatalogState>,
    Path(entry_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_entry(entry_id)?;
    Ok(Json(json!({
        "message": "Entry successfully deleted from the database"
    })))
}

// ============================================================
// Test endpoints
// ============================================================

pub async fn self_test(State(state): State<CatalogState>) -> Json<SelfTestReport> {
    Json(selftest::run_catalog_self_test(&state.base_url).await)
}

pub async fn schedule_test_email(Path(book_id): Path<i64>) -> (StatusCode, Json<Value>) {
    notify::schedule_confirmation_email(book_id);
    (
        StatusCode::CREATED,
        Json(json!({
            "message": format!(
                "A test email task for book {} has been successfully scheduled",
                book_id
            )
        })),
    )
}
