use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use rosterbook::api::create_directory_router;
use rosterbook::db::EmployeeStore;
use rosterbook::models::EmployeeRecord;
use rosterbook::registry::DepartmentRegistry;

fn setup() -> TestServer {
    let store = EmployeeStore::open_memory().expect("Failed to create store");
    store.setup().expect("Failed to create tables");
    let app = create_directory_router(store, DepartmentRegistry::new());
    TestServer::new(app).expect("Failed to create test server")
}

fn sample_employee(id: &str) -> EmployeeRecord {
    EmployeeRecord {
        employee_name: "John Doe".to_string(),
        employee_id: id.to_string(),
        employee_title: "Software Engineer".to_string(),
        employee_department: "Engineering".to_string(),
    }
}

async fn list_employees(server: &TestServer) -> Vec<Value> {
    let response = server.get("/employees").await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["employees"]
        .as_array()
        .expect("employees field missing")
        .clone()
}

// ============================================================
// Employees
// ============================================================

mod employees {
    use super::*;

    #[tokio::test]
    async fn add_reports_success_with_the_employee_name() {
        let server = setup();

        let response = server.post("/employee/add").json(&sample_employee("123")).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Employee John Doe added");
    }

    #[tokio::test]
    async fn add_then_list_includes_the_employee_exactly_once() {
        let server = setup();

        server.post("/employee/add").json(&sample_employee("123")).await;

        let employees = list_employees(&server).await;
        let matches: Vec<_> = employees
            .iter()
            .filter(|e| e["employee_id"] == "123")
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["employee_name"], "John Doe");
    }

    #[tokio::test]
    async fn list_returns_empty_wrapper_when_no_employees_exist() {
        let server = setup();

        let employees = list_employees(&server).await;

        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn duplicate_employee_ids_are_accepted_and_both_listed() {
        let server = setup();

        server.post("/employee/add").json(&sample_employee("123")).await;
        server.post("/employee/add").json(&sample_employee("123")).await;

        let employees = list_employees(&server).await;
        assert_eq!(employees.len(), 2);
    }

    #[tokio::test]
    async fn remove_reports_success_even_for_an_unknown_id() {
        let server = setup();

        let response = server.delete("/employee/remove/never-added").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Employee with ID never-added removed");
    }

    #[tokio::test]
    async fn remove_deletes_the_stored_record() {
        let server = setup();
        server.post("/employee/add").json(&sample_employee("123")).await;

        server.delete("/employee/remove/123").await.assert_status_ok();

        let employees = list_employees(&server).await;
        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_the_record_under_the_old_id() {
        let server = setup();
        server.post("/employee/add").json(&sample_employee("123")).await;

        let replacement = EmployeeRecord {
            employee_name: "Jane Doe".to_string(),
            employee_id: "456".to_string(),
            employee_title: "Staff Engineer".to_string(),
            employee_department: "Platform".to_string(),
        };
        let response = server
            .put("/employee/update/123")
            .json(&replacement)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Employee with ID 123 updated");

        let employees = list_employees(&server).await;
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0]["employee_id"], "456");
        assert_eq!(employees[0]["employee_name"], "Jane Doe");
    }

    #[tokio::test]
    async fn add_rejects_bodies_missing_required_fields() {
        let server = setup();

        let response = server
            .post("/employee/add")
            .json(&serde_json::json!({ "employee_name": "No Id" }))
            .await;

        assert!(response.status_code().is_client_error());
    }
}

// ============================================================
// Departments
// ============================================================

mod departments {
    use super::*;

    #[tokio::test]
    async fn add_registers_a_department() {
        let server = setup();

        let response = server.post("/department/add/Engineering").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Department Engineering added");
    }

    #[tokio::test]
    async fn adding_twice_yields_conflict() {
        let server = setup();

        server.post("/department/add/Engineering").await.assert_status_ok();

        let response = server.post("/department/add/Engineering").await;
        response.assert_status(StatusCode::CONFLICT);
        assert!(response.text().contains("already exists"));
    }

    #[tokio::test]
    async fn removing_an_undefined_department_yields_not_found() {
        let server = setup();

        let response = server.delete("/department/remove/Mystery").await;

        response.assert_status_not_found();
        assert!(response.text().contains("not found"));
    }

    #[tokio::test]
    async fn remove_after_add_succeeds_and_frees_the_name() {
        let server = setup();
        server.post("/department/add/Sales").await.assert_status_ok();

        server.delete("/department/remove/Sales").await.assert_status_ok();

        // The name can be registered again once removed
        server.post("/department/add/Sales").await.assert_status_ok();
    }
}

// ============================================================
// Health
// ============================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn returns_ok() {
        let server = setup();

        server.get("/health").await.assert_status_ok();
    }
}
