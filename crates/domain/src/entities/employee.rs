use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Core Employee entity - one persisted employee record
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Option<i32>, // None for new employees before persistence
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        department: String,
        salary: Decimal,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            department,
            salary,
            hire_date,
        }
    }

    pub fn with_id(
        id: i32,
        first_name: String,
        last_name: String,
        email: String,
        department: String,
        salary: Decimal,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            email,
            department,
            salary,
            hire_date,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Largest salary a DECIMAL(10,2) column can hold, in cents.
pub const MAX_SALARY_CENTS: i64 = 9_999_999_999;

/// Rounds a salary to cents, half away from zero, the way the store keeps it.
pub fn round_salary(salary: Decimal) -> Decimal {
    salary.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// True when the salary, once rounded to cents, is positive and fits the store.
pub fn is_storable_salary(salary: Decimal) -> bool {
    let rounded = round_salary(salary);
    rounded > Decimal::ZERO && rounded <= Decimal::new(MAX_SALARY_CENTS, 2)
}

/// Renders a salary with exactly two decimal places, rounding half away from zero.
pub fn format_salary(salary: Decimal) -> String {
    let mut rounded = round_salary(salary);
    rounded.rescale(2);
    rounded.to_string()
}

/// Fixed-width row used by every console listing.
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self
            .id
            .map_or_else(|| "-".to_string(), |id| id.to_string());

        write!(
            f,
            "ID: {:<3} | Name: {:<15} | Email: {:<20} | Dept: {:<10} | Salary: ${:<10} | Hired: {}",
            id,
            self.full_name(),
            self.email,
            self.department,
            format_salary(self.salary),
            self.hire_date.format("%Y-%m-%d"),
        )
    }
}
