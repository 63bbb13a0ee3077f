pub mod console;
pub mod prompt;

pub use console::{print_banner, EmployeeConsole, MenuChoice};

use domain::*;
use infrastructure::*;
use std::sync::Arc;

/// Employee Application - wires the store, repository and service once at startup
pub struct EmployeeApp {
    pub employee_service: EmployeeService,
    database: Database,
}

impl EmployeeApp {
    pub fn new(database_url: &str) -> Self {
        // Infrastructure layer - database handle
        let database = Database::new(database_url);

        // Create repository implementation
        let employee_repository: Arc<dyn EmployeeRepository> =
            Arc::new(SqliteEmployeeRepository::new(database.clone()));

        // Domain service
        let employee_service = EmployeeService::new(employee_repository);

        Self {
            employee_service,
            database,
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Console bound to this app's service.
    pub fn console<R, W>(&self, input: R, output: W) -> EmployeeConsole<'_, R, W>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        EmployeeConsole::new(&self.employee_service, input, output)
    }
}
