use crate::prompt;
use domain::{format_salary, is_storable_salary, Employee, EmployeeService, SalaryStatistics};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

const MENU_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 120;

/// Entries of the main menu, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee = 1,
    ListAll = 2,
    FindById = 3,
    FindByDepartment = 4,
    Update = 5,
    Delete = 6,
    Statistics = 7,
    Exit = 8,
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(MenuChoice::AddEmployee),
            2 => Ok(MenuChoice::ListAll),
            3 => Ok(MenuChoice::FindById),
            4 => Ok(MenuChoice::FindByDepartment),
            5 => Ok(MenuChoice::Update),
            6 => Ok(MenuChoice::Delete),
            7 => Ok(MenuChoice::Statistics),
            8 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

pub fn print_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                                                              ║")?;
    writeln!(output, "║               EMPLOYEE MANAGEMENT SYSTEM                     ║")?;
    writeln!(output, "║                                                              ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝")
}

/// Interactive menu loop over any line-oriented input and output.
///
/// The service is borrowed, not owned: it is built once at startup and
/// outlives the console.
pub struct EmployeeConsole<'a, R, W> {
    service: &'a EmployeeService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> EmployeeConsole<'a, R, W> {
    pub fn new(service: &'a EmployeeService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Consumes the console and hands back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the operator picks Exit or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_menu()?;
            let outcome = self.read_i32("Enter your choice: ").and_then(|number| {
                match MenuChoice::try_from(number) {
                    Ok(MenuChoice::Exit) => {
                        writeln!(self.output, "\nThank you for using Employee Management System!")?;
                        Ok(false)
                    }
                    Ok(choice) => self.dispatch(choice).map(|()| true),
                    Err(_) => {
                        writeln!(self.output, "\nInvalid choice! Please try again.")?;
                        Ok(true)
                    }
                }
            });

            match outcome {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("input closed, leaving menu loop");
                    writeln!(self.output, "\nInput closed. Goodbye!")?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::AddEmployee => self.add_employee(),
            MenuChoice::ListAll => self.list_all(),
            MenuChoice::FindById => self.find_by_id(),
            MenuChoice::FindByDepartment => self.find_by_department(),
            MenuChoice::Update => self.update_employee(),
            MenuChoice::Delete => self.delete_employee(),
            MenuChoice::Statistics => self.show_statistics(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(MENU_WIDTH);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "                        MAIN MENU")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "  1. Add New Employee")?;
        writeln!(self.output, "  2. View All Employees")?;
        writeln!(self.output, "  3. Search Employee by ID")?;
        writeln!(self.output, "  4. Search Employees by Department")?;
        writeln!(self.output, "  5. Update Employee")?;
        writeln!(self.output, "  6. Delete Employee")?;
        writeln!(self.output, "  7. View Statistics")?;
        writeln!(self.output, "  8. Exit")?;
        writeln!(self.output, "{}", rule)
    }

    fn add_employee(&mut self) -> io::Result<()> {
        self.section("ADD NEW EMPLOYEE")?;

        let first_name = self.read_line("First Name: ")?;
        let last_name = self.read_line("Last Name: ")?;
        let email = self.read_line("Email: ")?;
        let department = self.read_line("Department: ")?;
        let salary = prompt::read_decimal(&mut self.input, &mut self.output, "Salary: ")?;
        let hire_date =
            prompt::read_date(&mut self.input, &mut self.output, "Hire Date (yyyy-MM-dd): ")?;

        if [&first_name, &last_name, &email, &department]
            .iter()
            .any(|field| field.is_empty())
        {
            return writeln!(self.output, "All fields are required!");
        }
        if salary <= Decimal::ZERO {
            return writeln!(self.output, "Salary must be positive!");
        }
        if !is_storable_salary(salary) {
            return writeln!(self.output, "Salary must be below 100000000.00!");
        }

        let mut employee = Employee::new(first_name, last_name, email, department, salary, hire_date);
        match (self.service.add_employee(&mut employee), employee.id) {
            (true, Some(id)) => writeln!(self.output, "Employee added successfully! ID: {}", id),
            _ => writeln!(self.output, "Failed to add employee."),
        }
    }

    fn list_all(&mut self) -> io::Result<()> {
        self.section("ALL EMPLOYEES")?;

        let employees = self.service.all_employees();
        if employees.is_empty() {
            return writeln!(self.output, "No employees found in the database.");
        }

        writeln!(self.output, "\nTotal Employees: {}", employees.len())?;
        self.table(&employees)
    }

    fn find_by_id(&mut self) -> io::Result<()> {
        self.section("SEARCH EMPLOYEE BY ID")?;

        let id = self.read_i32("Enter Employee ID: ")?;
        match self.service.employee_by_id(id) {
            Some(employee) => {
                writeln!(self.output, "\nEmployee Found:")?;
                self.table(std::slice::from_ref(&employee))
            }
            None => writeln!(self.output, "No employee found with ID: {}", id),
        }
    }

    fn find_by_department(&mut self) -> io::Result<()> {
        self.section("SEARCH EMPLOYEES BY DEPARTMENT")?;

        let department = self.read_line("Enter Department: ")?;
        let employees = self.service.employees_by_department(&department);
        if employees.is_empty() {
            return writeln!(
                self.output,
                "No employees found in {} department.",
                department
            );
        }

        writeln!(
            self.output,
            "\nFound {} employee(s) in {}",
            employees.len(),
            department
        )?;
        self.table(&employees)
    }

    fn update_employee(&mut self) -> io::Result<()> {
        self.section("UPDATE EMPLOYEE")?;

        let id = self.read_i32("Enter Employee ID to update: ")?;
        let Some(mut employee) = self.service.employee_by_id(id) else {
            return writeln!(self.output, "Employee not found with ID: {}", id);
        };

        writeln!(self.output, "\nCurrent Details:")?;
        writeln!(self.output, "{}", employee)?;
        writeln!(
            self.output,
            "\nEnter new details (press Enter to keep current value):"
        )?;

        // Blank keeps the current value; an unparsable date or a salary that
        // is unparsable, not positive or too large once rounded is ignored.
        if let Some(value) = self.read_optional(&format!("First Name [{}]: ", employee.first_name))? {
            employee.first_name = value;
        }
        if let Some(value) = self.read_optional(&format!("Last Name [{}]: ", employee.last_name))? {
            employee.last_name = value;
        }
        if let Some(value) = self.read_optional(&format!("Email [{}]: ", employee.email))? {
            employee.email = value;
        }
        if let Some(value) = self.read_optional(&format!("Department [{}]: ", employee.department))? {
            employee.department = value;
        }
        if let Some(salary) = self
            .read_optional(&format!("Salary [{}]: ", format_salary(employee.salary)))?
            .and_then(|s| prompt::parse_salary(&s))
            .filter(|salary| is_storable_salary(*salary))
        {
            employee.salary = salary;
        }
        if let Some(hire_date) = self
            .read_optional(&format!(
                "Hire Date [{}] (yyyy-MM-dd): ",
                employee.hire_date.format(prompt::DATE_FORMAT)
            ))?
            .and_then(|s| prompt::parse_date(&s))
        {
            employee.hire_date = hire_date;
        }

        if self.service.update_employee(&employee) {
            writeln!(self.output, "Employee updated successfully!")
        } else {
            writeln!(self.output, "Failed to update employee with ID: {}", id)
        }
    }

    fn delete_employee(&mut self) -> io::Result<()> {
        self.section("DELETE EMPLOYEE")?;

        let id = self.read_i32("Enter Employee ID to delete: ")?;
        let Some(employee) = self.service.employee_by_id(id) else {
            return writeln!(self.output, "Employee not found with ID: {}", id);
        };

        writeln!(self.output, "\nEmployee to delete:")?;
        writeln!(self.output, "{}", employee)?;

        let confirmation = self
            .read_line("\nAre you sure you want to delete this employee? (yes/no): ")?
            .to_lowercase();
        if confirmation != "yes" && confirmation != "y" {
            return writeln!(self.output, "Deletion cancelled.");
        }

        if self.service.delete_employee(id) {
            writeln!(self.output, "Employee deleted successfully!")
        } else {
            writeln!(self.output, "Failed to delete employee with ID: {}", id)
        }
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        self.section("DATABASE STATISTICS")?;

        let total = self.service.employee_count();
        writeln!(self.output, "Total Employees: {}", total)?;
        if total == 0 {
            return Ok(());
        }

        if let Some(stats) = SalaryStatistics::from_employees(&self.service.all_employees()) {
            writeln!(self.output, "Average Salary: ${}", format_salary(stats.average))?;
            writeln!(self.output, "Highest Salary: ${}", format_salary(stats.highest))?;
            writeln!(self.output, "Lowest Salary: ${}", format_salary(stats.lowest))?;
        }
        Ok(())
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        let rule = "─".repeat(MENU_WIDTH);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "               {}", title)?;
        writeln!(self.output, "{}", rule)
    }

    fn table(&mut self, employees: &[Employee]) -> io::Result<()> {
        let rule = "─".repeat(TABLE_WIDTH);
        writeln!(self.output, "{}", rule)?;
        for employee in employees {
            writeln!(self.output, "{}", employee)?;
        }
        writeln!(self.output, "{}", rule)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        prompt::read_line(&mut self.input, &mut self.output, prompt)
    }

    fn read_optional(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let line = self.read_line(prompt)?;
        Ok(Some(line).filter(|value| !value.is_empty()))
    }

    fn read_i32(&mut self, prompt: &str) -> io::Result<i32> {
        prompt::read_i32(&mut self.input, &mut self.output, prompt)
    }
}
