use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Employee not found with ID: {0}")]
    EmployeeNotFound(i32),

    #[error("An employee with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
