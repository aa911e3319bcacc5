//! In-memory department registry for the directory service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Department;

/// Domain errors raised by the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Department already exists")]
    AlreadyExists,
    #[error("Department not found")]
    NotFound,
}

/// The only copy of department records.
///
/// Nothing here is persisted or reconciled with the employee documents,
/// and the contents reset on restart. A single lock guards concurrent
/// mutation from overlapping request handlers.
#[derive(Clone, Debug, Default)]
pub struct DepartmentRegistry {
    inner: Arc<Mutex<HashMap<String, Department>>>,
}

impl DepartmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a department. Duplicate names are rejected.
    pub fn add(&self, department_name: &str) -> Result<(), RegistryError> {
        let mut departments = self.inner.lock().expect("registry lock poisoned");
        if departments.contains_key(department_name) {
            return Err(RegistryError::AlreadyExists);
        }
        departments.insert(
            department_name.to_string(),
            Department::new(department_name),
        );
        Ok(())
    }

    /// Drop a department. Absent names are rejected.
    pub fn remove(&self, department_name: &str) -> Result<(), RegistryError> {
        let mut departments = self.inner.lock().expect("registry lock poisoned");
        departments
            .remove(department_name)
            .map(|_| ())
            .ok_or(RegistryError::NotFound)
    }

    pub fn get(&self, department_name: &str) -> Option<Department> {
        self.inner
            .lock()
            .expect("registry lock poisoned")
            .get(department_name)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_registers_a_department() {
        let registry = DepartmentRegistry::new();

        registry.add("Engineering").expect("add failed");

        let department = registry.get("Engineering").expect("missing department");
        assert_eq!(department.department_name, "Engineering");
        assert!(department.department_employees.is_empty());
    }

    #[test]
    fn add_rejects_duplicate_names() {
        let registry = DepartmentRegistry::new();

        registry.add("Engineering").expect("add failed");

        assert_eq!(
            registry.add("Engineering"),
            Err(RegistryError::AlreadyExists)
        );
    }

    #[test]
    fn remove_drops_an_existing_department() {
        let registry = DepartmentRegistry::new();
        registry.add("Sales").expect("add failed");

        registry.remove("Sales").expect("remove failed");

        assert!(registry.get("Sales").is_none());
    }

    #[test]
    fn remove_rejects_absent_names() {
        let registry = DepartmentRegistry::new();

        assert_eq!(registry.remove("Mystery"), Err(RegistryError::NotFound));
    }

    #[test]
    fn registries_share_state_across_clones() {
        let registry = DepartmentRegistry::new();
        let other = registry.clone();

        registry.add("Engineering").expect("add failed");

        assert!(other.get("Engineering").is_some());
    }
}
