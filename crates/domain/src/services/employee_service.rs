use crate::entities::Employee;
use crate::errors::DomainError;
use crate::repositories::EmployeeRepository;
use std::sync::Arc;
use tracing::{error, info};

/// Employee Service - the data access contract used by the console.
///
/// Store failures never reach the caller: each one is logged and degraded to
/// a neutral value (`false`, an empty list, `None` or zero). Callers therefore
/// cannot tell "not found" apart from "store unreachable"; use the repository
/// directly when that distinction matters.
pub struct EmployeeService {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employee_repository,
        }
    }

    /// Insert a new employee; on success the generated id is written back.
    pub fn add_employee(&self, employee: &mut Employee) -> bool {
        match self.employee_repository.insert(employee) {
            Ok(id) => {
                employee.id = Some(id);
                info!(id, "employee added");
                true
            }
            Err(e) => {
                error!("Error adding employee: {}", e);
                false
            }
        }
    }

    pub fn all_employees(&self) -> Vec<Employee> {
        self.employee_repository.find_all().unwrap_or_else(|e| {
            error!("Error retrieving employees: {}", e);
            Vec::new()
        })
    }

    pub fn employee_by_id(&self, id: i32) -> Option<Employee> {
        self.employee_repository.find_by_id(id).unwrap_or_else(|e| {
            error!("Error retrieving employee {}: {}", id, e);
            None
        })
    }

    pub fn employees_by_department(&self, department: &str) -> Vec<Employee> {
        self.employee_repository
            .find_by_department(department)
            .unwrap_or_else(|e| {
                error!("Error searching employees: {}", e);
                Vec::new()
            })
    }

    /// Full-row update; `false` when the id matched nothing or the store failed.
    pub fn update_employee(&self, employee: &Employee) -> bool {
        self.report(self.employee_repository.update(employee), "updating")
    }

    pub fn delete_employee(&self, id: i32) -> bool {
        self.report(self.employee_repository.delete(id), "deleting")
    }

    pub fn employee_count(&self) -> i64 {
        self.employee_repository.count().unwrap_or_else(|e| {
            error!("Error counting employees: {}", e);
            0
        })
    }

    fn report(&self, result: Result<(), DomainError>, action: &str) -> bool {
        match result {
            Ok(()) => true,
            // A missing row is an expected outcome, not a store failure.
            Err(DomainError::EmployeeNotFound(id)) => {
                info!(id, "no employee matched while {}", action);
                false
            }
            Err(e) => {
                error!("Error {} employee: {}", action, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    /// In-memory repository; `fail` makes every call return a connection error.
    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<Vec<Employee>>,
        fail: bool,
    }

    impl MemoryRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), DomainError> {
            if self.fail {
                Err(DomainError::ConnectionError("store unreachable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl EmployeeRepository for MemoryRepository {
        fn insert(&self, employee: &Employee) -> Result<i32, DomainError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|e| e.email == employee.email) {
                return Err(DomainError::DuplicateEmail(employee.email.clone()));
            }
            let id = rows.len() as i32 + 1;
            let mut stored = employee.clone();
            stored.id = Some(id);
            rows.push(stored);
            Ok(id)
        }

        fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
            self.check()?;
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == Some(id))
                .cloned())
        }

        fn find_by_department(&self, department: &str) -> Result<Vec<Employee>, DomainError> {
            self.check()?;
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.department == department)
                .cloned()
                .collect())
        }

        fn update(&self, employee: &Employee) -> Result<(), DomainError> {
            self.check()?;
            let id = employee.id.unwrap_or_default();
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|e| e.id == Some(id))
                .ok_or(DomainError::EmployeeNotFound(id))?;
            *row = employee.clone();
            Ok(())
        }

        fn delete(&self, id: i32) -> Result<(), DomainError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|e| e.id != Some(id));
            if rows.len() == before {
                return Err(DomainError::EmployeeNotFound(id));
            }
            Ok(())
        }

        fn count(&self) -> Result<i64, DomainError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().len() as i64)
        }
    }

    fn employee(email: &str) -> Employee {
        Employee::new(
            "Grace".to_string(),
            "Hopper".to_string(),
            email.to_string(),
            "Navy".to_string(),
            Decimal::new(500000, 2),
            NaiveDate::from_ymd_opt(1943, 12, 1).unwrap(),
        )
    }

    #[test]
    fn add_employee_writes_back_generated_id() {
        let service = EmployeeService::new(Arc::new(MemoryRepository::default()));
        let mut grace = employee("grace@example.com");

        assert!(service.add_employee(&mut grace));
        assert_eq!(grace.id, Some(1));
    }

    #[test]
    fn duplicate_email_is_reported_as_false() {
        let service = EmployeeService::new(Arc::new(MemoryRepository::default()));
        let mut first = employee("grace@example.com");
        let mut second = employee("grace@example.com");

        assert!(service.add_employee(&mut first));
        assert!(!service.add_employee(&mut second));
        assert_eq!(second.id, None);
        assert_eq!(service.employee_count(), 1);
    }

    #[test]
    fn missing_rows_degrade_to_false() {
        let service = EmployeeService::new(Arc::new(MemoryRepository::default()));
        let mut ghost = employee("ghost@example.com");
        ghost.id = Some(42);

        assert!(!service.update_employee(&ghost));
        assert!(!service.delete_employee(42));
        assert_eq!(service.employee_by_id(42), None);
    }

    #[test]
    fn store_failures_degrade_to_neutral_values() {
        let service = EmployeeService::new(Arc::new(MemoryRepository::failing()));
        let mut grace = employee("grace@example.com");

        assert!(!service.add_employee(&mut grace));
        assert!(service.all_employees().is_empty());
        assert!(service.employees_by_department("Navy").is_empty());
        assert_eq!(service.employee_by_id(1), None);
        assert!(!service.delete_employee(1));
        assert_eq!(service.employee_count(), 0);
    }
}
