// Database schema for the employee directory
diesel::table! {
    employees (id) {
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
        email -> Text,             // Unique across all rows
        department -> Text,
        salary_cents -> BigInt,    // Fixed-point salary, scale 2
        hire_date -> Date,
        created_at -> Timestamp,
        updated_at -> Timestamp,   // Refreshed by trigger on every update
    }
}

/// Idempotent DDL executed at startup.
pub const CREATE_SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    department TEXT NOT NULL,
    salary_cents INTEGER NOT NULL CHECK (salary_cents > 0),
    hire_date DATE NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TRIGGER IF NOT EXISTS employees_touch_updated_at
AFTER UPDATE ON employees
FOR EACH ROW
BEGIN
    UPDATE employees SET updated_at = CURRENT_TIMESTAMP WHERE id = OLD.id;
END;
";
