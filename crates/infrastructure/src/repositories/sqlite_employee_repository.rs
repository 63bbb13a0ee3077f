use crate::database::{employees, Database};
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use domain::{round_salary, DomainError, Employee, EmployeeRepository, MAX_SALARY_CENTS};
use rust_decimal::Decimal;
use tracing::debug;

// Database model; every read path hydrates through this one shape.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct EmployeeModel {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    department: String,
    salary_cents: i64,
    hire_date: NaiveDate,
}

// Mutable columns, in bind order, shared by insert and update.
#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = employees)]
struct EmployeeChangeset<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    department: &'a str,
    salary_cents: i64,
    hire_date: NaiveDate,
}

impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee::with_id(
            model.id,
            model.first_name,
            model.last_name,
            model.email,
            model.department,
            Decimal::new(model.salary_cents, 2),
            model.hire_date,
        )
    }
}

impl<'a> TryFrom<&'a Employee> for EmployeeChangeset<'a> {
    type Error = DomainError;

    fn try_from(employee: &'a Employee) -> Result<Self, Self::Error> {
        Ok(EmployeeChangeset {
            first_name: &employee.first_name,
            last_name: &employee.last_name,
            email: &employee.email,
            department: &employee.department,
            salary_cents: salary_to_cents(employee.salary)?,
            hire_date: employee.hire_date,
        })
    }
}

/// Rounds half away from zero to two places and scales to integer cents.
fn salary_to_cents(salary: Decimal) -> Result<i64, DomainError> {
    let mut rounded = round_salary(salary);
    rounded.rescale(2);

    i64::try_from(rounded.mantissa())
        .ok()
        .filter(|cents| (1..=MAX_SALARY_CENTS).contains(cents))
        .ok_or_else(|| {
            DomainError::ValidationError(format!(
                "Salary {} must be positive and fit in 10 digits with 2 decimals",
                salary
            ))
        })
}

fn read_error(e: DieselError) -> DomainError {
    DomainError::RepositoryError(e.to_string())
}

fn write_error(e: DieselError, email: &str) -> DomainError {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DomainError::DuplicateEmail(email.to_string())
        }
        other => DomainError::RepositoryError(other.to_string()),
    }
}

pub struct SqliteEmployeeRepository {
    database: Database,
}

impl SqliteEmployeeRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn insert(&self, employee: &Employee) -> Result<i32, DomainError> {
        let new_employee = EmployeeChangeset::try_from(employee)?;
        let mut conn = self.database.connect()?;

        diesel::insert_into(employees::table)
            .values(&new_employee)
            .execute(&mut conn)
            .map_err(|e| write_error(e, new_employee.email))?;

        // Email is unique, so it identifies the row just inserted
        let id = employees::table
            .filter(employees::email.eq(new_employee.email))
            .select(employees::id)
            .first::<i32>(&mut conn)
            .map_err(read_error)?;

        debug!(id, "inserted employee row");
        Ok(id)
    }

    fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let mut conn = self.database.connect()?;

        let result = employees::table
            .order(employees::id.asc())
            .select(EmployeeModel::as_select())
            .load::<EmployeeModel>(&mut conn)
            .map_err(read_error)?;

        Ok(result.into_iter().map(|model| model.into()).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
        let mut conn = self.database.connect()?;

        let result = employees::table
            .find(id)
            .select(EmployeeModel::as_select())
            .first::<EmployeeModel>(&mut conn)
            .optional()
            .map_err(read_error)?;

        Ok(result.map(|model| model.into()))
    }

    fn find_by_department(&self, department: &str) -> Result<Vec<Employee>, DomainError> {
        let mut conn = self.database.connect()?;

        let result = employees::table
            .filter(employees::department.eq(department))
            .order((employees::last_name.asc(), employees::id.asc()))
            .select(EmployeeModel::as_select())
            .load::<EmployeeModel>(&mut conn)
            .map_err(read_error)?;

        Ok(result.into_iter().map(|model| model.into()).collect())
    }

    fn update(&self, employee: &Employee) -> Result<(), DomainError> {
        let employee_id = employee.id.ok_or_else(|| {
            DomainError::ValidationError("Employee ID is required for updates".to_string())
        })?;
        let changes = EmployeeChangeset::try_from(employee)?;
        let mut conn = self.database.connect()?;

        let rows = diesel::update(employees::table.find(employee_id))
            .set(&changes)
            .execute(&mut conn)
            .map_err(|e| write_error(e, changes.email))?;

        if rows == 0 {
            return Err(DomainError::EmployeeNotFound(employee_id));
        }
        Ok(())
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.database.connect()?;

        let rows = diesel::delete(employees::table.find(id))
            .execute(&mut conn)
            .map_err(read_error)?;

        if rows == 0 {
            return Err(DomainError::EmployeeNotFound(id));
        }
        Ok(())
    }

    fn count(&self) -> Result<i64, DomainError> {
        let mut conn = self.database.connect()?;

        employees::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(read_error)
    }
}
