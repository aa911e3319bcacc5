use serde::{Deserialize, Serialize};

/// An employee record as supplied by clients.
///
/// `employee_id` is caller-assigned and deliberately unchecked for
/// uniqueness; the store accepts duplicates and lists them all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_name: String,
    pub employee_id: String,
    pub employee_title: String,
    pub employee_department: String,
}

/// A department held in the in-memory registry.
///
/// Departments live for the process lifetime only and reset on restart.
/// `department_employees` is never reconciled with the persisted employee
/// documents; the two are independent sources of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub department_name: String,
    #[serde(default)]
    pub department_employees: Vec<EmployeeRecord>,
}

impl Department {
    pub fn new(department_name: impl Into<String>) -> Self {
        Self {
            department_name: department_name.into(),
            department_employees: Vec::new(),
        }
    }
}
