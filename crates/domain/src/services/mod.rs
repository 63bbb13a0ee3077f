pub mod employee_service;
pub mod salary_statistics;

pub use employee_service::EmployeeService;
pub use salary_statistics::SalaryStatistics;
