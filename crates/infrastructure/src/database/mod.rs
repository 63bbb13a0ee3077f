use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use domain::DomainError;
use tracing::{debug, info};

pub mod schema;
pub use schema::*;

/// Handle to the SQLite store.
///
/// No connection is held between calls: every operation establishes its own
/// `SqliteConnection`, which is closed when it goes out of scope.
#[derive(Debug, Clone)]
pub struct Database {
    database_url: String,
}

impl Database {
    pub fn new(database_url: &str) -> Self {
        Database {
            database_url: database_url.to_string(),
        }
    }

    pub fn connect(&self) -> Result<SqliteConnection, DomainError> {
        debug!(url = %self.database_url, "opening connection");
        SqliteConnection::establish(&self.database_url)
            .map_err(|e| DomainError::ConnectionError(e.to_string()))
    }

    /// Create the `employees` table and its trigger if they do not exist yet.
    pub fn initialize(&self) -> Result<(), DomainError> {
        let mut conn = self.connect()?;
        conn.batch_execute(CREATE_SCHEMA_SQL)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        info!(url = %self.database_url, "schema ready");
        Ok(())
    }

    /// Round-trips a trivial query to prove the store is reachable.
    pub fn check_connection(&self) -> Result<(), DomainError> {
        let mut conn = self.connect()?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(|e| DomainError::ConnectionError(e.to_string()))?;
        Ok(())
    }
}
