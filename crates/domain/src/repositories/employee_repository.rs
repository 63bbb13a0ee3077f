use crate::entities::Employee;
use crate::errors::DomainError;

/// Repository trait - defines what we need from the persistence layer.
///
/// Every call is self-contained: implementations acquire a store connection,
/// run a single parameterized statement and release the connection before
/// returning.
pub trait EmployeeRepository: Send + Sync {
    /// Persists a new employee and returns the store-generated id.
    fn insert(&self, employee: &Employee) -> Result<i32, DomainError>;

    /// All employees ordered by id ascending.
    fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError>;

    /// Exact department match ordered by last name ascending.
    fn find_by_department(&self, department: &str) -> Result<Vec<Employee>, DomainError>;

    /// Overwrites every mutable column of the row keyed by `employee.id`.
    /// Fails with `EmployeeNotFound` when no row matched.
    fn update(&self, employee: &Employee) -> Result<(), DomainError>;

    /// Fails with `EmployeeNotFound` when no row matched.
    fn delete(&self, id: i32) -> Result<(), DomainError>;

    fn count(&self) -> Result<i64, DomainError>;
}
