use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::db::EmployeeStore;
use crate::models::EmployeeRecord;
use crate::registry::DepartmentRegistry;

/// Shared state for the directory service.
#[derive(Clone)]
pub struct DirectoryState {
    pub store: EmployeeStore,
    pub departments: DepartmentRegistry,
}

// ============================================================
// Employees
// ============================================================

pub async fn add_employee(
    State(state): State<DirectoryState>,
    Json(employee): Json<EmployeeRecord>,
) -> Result<Json<Value>, ApiError> {
    state.store.insert(&employee)?;
    Ok(Json(json!({
        "message": format!("Employee {} added", employee.employee_name)
    })))
}

/// Deletes unconditionally; an id that was never stored still succeeds.
pub async fn remove_employee(
    State(state): State<DirectoryState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.remove(&employee_id)?;
    Ok(Json(json!({
        "message": format!("Employee with ID {} removed", employee_id)
    })))
}

pub async fn list_employees(
    State(state): State<DirectoryState>,
) -> Result<Json<Value>, ApiError> {
    let employees = state.store.list()?;
    Ok(Json(json!({ "employees": employees })))
}

/// Delete-then-insert with no wrapping transaction; if the insert fails
/// after the delete succeeded, the record is gone.
pub async fn update_employee(
    State(state): State<DirectoryState>,
    Path(employee_id): Path<String>,
    Json(employee): Json<EmployeeRecord>,
) -> Result<Json<Value>, ApiError> {
    state.store.remove(&employee_id)?;
    state.store.insert(&employee)?;
    Ok(Json(json!({
        "message": format!("Employee with ID {} updated", employee_id)
    })))
}

// ============================================================
// Departments (in-memory only)
// ============================================================

pub async fn add_department(
    State(state): State<DirectoryState>,
    Path(department_name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.departments.add(&department_name)?;
    Ok(Json(json!({
        "message": format!("Department {} added", department_name)
    })))
}

pub async fn remove_department(
    State(state): State<DirectoryState>,
    Path(department_name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.departments.remove(&department_name)?;
    Ok(Json(json!({
        "message": format!("Department {} removed", department_name)
    })))
}
