mod catalog;
mod directory;
mod error;

use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db::{Database, EmployeeStore};
use crate::registry::DepartmentRegistry;

pub use catalog::CatalogState;
pub use directory::DirectoryState;
pub use error::ApiError;

/// Router for the employee/department directory service.
pub fn create_directory_router(store: EmployeeStore, departments: DepartmentRegistry) -> Router {
    Router::new()
        // Employees
        .route("/employee/add", post(directory::add_employee))
        .route(
            "/employee/remove/{employee_id}",
            delete(directory::remove_employee),
        )
        .route("/employees", get(directory::list_employees))
        .route(
            "/employee/update/{employee_id}",
            put(directory::update_employee),
        )
        // Departments (in-memory only)
        .route(
            "/department/add/{department_name}",
            post(directory::add_department),
        )
        .route(
            "/department/remove/{department_name}",
            delete(directory::remove_department),
        )
        // Health
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(DirectoryState { store, departments })
}

/// Router for the book/review catalog service.
///
/// `base_url` must be the address this router is served at; the self-test
/// endpoint calls back into it over real HTTP.
pub fn create_catalog_router(db: Database, base_url: impl Into<String>) -> Router {
    Router::new()
        // Books
        .route("/add-new-book/", post(catalog::add_book))
        .route("/list-books/", get(catalog::list_books))
        .route("/update-book/{book_id}/", put(catalog::update_book))
        // Reviews
        .route("/add-new-review/{book_id}/", post(catalog::add_review))
        .route(
            "/check_of_all_list_reviews/{book_id}/",
            get(catalog::list_reviews),
        )
        // Generic entry deletion (latent defect preserved; see db)
        .route("/delete-entry/{entry_id}/", delete(catalog::delete_entry))
        // Test endpoints
        .route("/automate-test-endpoint-book/", get(catalog::self_test))
        .route(
            "/dynamic-test-email/{book_id}/",
            post(catalog::schedule_test_email),
        )
        // Health
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(CatalogState {
            db,
            base_url: base_url.into(),
        })
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
