use crate::entities::Employee;
use rust_decimal::{Decimal, RoundingStrategy};

/// Aggregate salary figures over a set of employees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryStatistics {
    pub average: Decimal,
    pub highest: Decimal,
    pub lowest: Decimal,
}

impl SalaryStatistics {
    /// Returns `None` for an empty slice. The average is rounded to cents.
    pub fn from_employees(employees: &[Employee]) -> Option<Self> {
        let first = employees.first()?.salary;

        let (total, highest, lowest) = employees.iter().fold(
            (Decimal::ZERO, first, first),
            |(total, highest, lowest), e| {
                (total + e.salary, highest.max(e.salary), lowest.min(e.salary))
            },
        );

        let average = (total / Decimal::from(employees.len()))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Some(Self {
            average,
            highest,
            lowest,
        })
    }
}
