//! End-to-end self-test for the catalog service.
//!
//! Drives the service's own HTTP surface with a real client rather than
//! calling the storage layer directly, so the whole request path is
//! exercised: add book → list books → add review → list reviews.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::models::{NewBookInput, NewReviewInput, SelfTestReport};

/// Run the catalog self-test against a service listening at `base_url`,
/// reporting the first failing step or overall success.
pub async fn run_catalog_self_test(base_url: &str) -> SelfTestReport {
    let client = reqwest::Client::new();

    // Step 1: add a book.
    let book = NewBookInput {
        title_of_book: "Test Book".to_string(),
        author_of_book: "Test Author".to_string(),
        year_of_publication: 2022,
    };
    let response = match client
        .post(format!("{}/add-new-book/", base_url))
        .json(&book)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return SelfTestReport::failed("Failed to add new book", json!(e.to_string())),
    };
    if response.status() != StatusCode::CREATED {
        return SelfTestReport::failed("Failed to add new book", response_body(response).await);
    }
    let body = response_body(response).await;
    let Some(book_id) = body.get("book_id").and_then(Value::as_i64) else {
        return SelfTestReport::failed("Failed to add new book", body);
    };

    // Step 2: list books.
    match client.get(format!("{}/list-books/", base_url)).send().await {
        Ok(response) if response.status() == StatusCode::OK => {}
        Ok(response) => {
            return SelfTestReport::failed("Failed to list books", response_body(response).await)
        }
        Err(e) => return SelfTestReport::failed("Failed to list books", json!(e.to_string())),
    }

    // Step 3: add a review for the book just created.
    let review = NewReviewInput {
        review_text: "Test Review".to_string(),
        review_rating: 5,
    };
    match client
        .post(format!("{}/add-new-review/{}/", base_url, book_id))
        .json(&review)
        .send()
        .await
    {
        Ok(response) if response.status() == StatusCode::CREATED => {}
        Ok(response) => {
            return SelfTestReport::failed(
                "Failed to add new review",
                response_body(response).await,
            )
        }
        Err(e) => return SelfTestReport::failed("Failed to add new review", json!(e.to_string())),
    }

    // Step 4: list reviews for that book.
    match client
        .get(format!("{}/check_of_all_list_reviews/{}/", base_url, book_id))
        .send()
        .await
    {
        Ok(response) if response.status() == StatusCode::OK => {}
        Ok(response) => {
            return SelfTestReport::failed("Failed to list reviews", response_body(response).await)
        }
        Err(e) => return SelfTestReport::failed("Failed to list reviews", json!(e.to_string())),
    }

    SelfTestReport::passed()
}

async fn response_body(response: reqwest::Response) -> Value {
    response.json().await.unwrap_or(Value::Null)
}
