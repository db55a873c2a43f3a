//! Interactive employee entry.
//!
//! The terminal loop in [`build_employees_interactively`] is a thin layer
//! over the pure parsing helpers in this module, which coerce and range-check
//! raw input before an employee is constructed.

use std::str::FromStr;

use dialoguer::Input;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeKind};

/// Inputs that end interactive entry.
pub const DONE_WORDS: [&str; 7] = ["done", "d", "q", "quit", "exit", "no", "n"];

/// The result of reading an employee type at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeChoice {
    /// The user is finished adding employees.
    Done,
    /// The user picked a variant.
    Kind(EmployeeKind),
    /// The input was not recognised.
    Invalid,
}

/// Interprets an employee-type answer, ignoring case and surrounding space.
pub fn parse_type_choice(input: &str) -> TypeChoice {
    let answer = input.trim().to_lowercase();
    if DONE_WORDS.contains(&answer.as_str()) {
        return TypeChoice::Done;
    }
    match answer.as_str() {
        "salaried" => TypeChoice::Kind(EmployeeKind::SalariedEmployee),
        "hourly" => TypeChoice::Kind(EmployeeKind::HourlyEmployee),
        "commissioned" => TypeChoice::Kind(EmployeeKind::CommissionedEmployee),
        _ => TypeChoice::Invalid,
    }
}

fn describe_bounds<T: ToString>(min: Option<T>, max: Option<T>) -> String {
    let show = |bound: Option<T>| bound.map_or("None".to_string(), |b| b.to_string());
    format!("between {} and {}", show(min), show(max))
}

/// Parses a decimal and checks it against inclusive bounds.
///
/// The error is the message to show before asking again.
///
/// # Examples
///
/// ```
/// use payroll_engine::prompt::parse_bounded_decimal;
/// use rust_decimal::Decimal;
///
/// let rate = parse_bounded_decimal(" 0.25 ", Some(Decimal::ZERO), Some(Decimal::ONE));
/// assert_eq!(rate, Ok(Decimal::new(25, 2)));
/// assert!(parse_bounded_decimal("1.5", Some(Decimal::ZERO), Some(Decimal::ONE)).is_err());
/// ```
pub fn parse_bounded_decimal(
    input: &str,
    min: Option<Decimal>,
    max: Option<Decimal>,
) -> Result<Decimal, String> {
    let invalid = || format!("Please enter a valid number {}.", describe_bounds(min, max));
    let value = Decimal::from_str(input.trim()).map_err(|_| invalid())?;
    if min.is_some_and(|m| value < m) || max.is_some_and(|m| value > m) {
        return Err(invalid());
    }
    Ok(value)
}

/// Parses an integer id and checks it against an inclusive lower bound.
pub fn parse_bounded_id(input: &str, min: Option<i64>) -> Result<i64, String> {
    let invalid = || format!("Please enter a valid integer {}.", describe_bounds(min, None));
    let value = input.trim().parse::<i64>().map_err(|_| invalid())?;
    if min.is_some_and(|m| value < m) {
        return Err(invalid());
    }
    Ok(value)
}

fn prompt_error(err: dialoguer::Error) -> EngineError {
    EngineError::PromptFailed {
        message: err.to_string(),
    }
}

fn prompt_text(prompt: &str) -> EngineResult<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_decimal(
    prompt: &str,
    min: Option<Decimal>,
    max: Option<Decimal>,
) -> EngineResult<Decimal> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> Result<(), String> {
            parse_bounded_decimal(input, min, max).map(|_| ())
        })
        .interact_text()
        .map_err(prompt_error)?;
    parse_bounded_decimal(&answer, min, max)
        .map_err(|message| EngineError::PromptFailed { message })
}

fn prompt_id(prompt: &str) -> EngineResult<i64> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> Result<(), String> {
            parse_bounded_id(input, Some(0)).map(|_| ())
        })
        .interact_text()
        .map_err(prompt_error)?;
    parse_bounded_id(&answer, Some(0)).map_err(|message| EngineError::PromptFailed { message })
}

/// Prompts for the fields of one employee of the given kind.
pub fn create_employee(kind: EmployeeKind) -> EngineResult<Employee> {
    let name = prompt_text("Name")?;
    let id = prompt_id("ID (integer)")?;

    let employee = match kind {
        EmployeeKind::SalariedEmployee => {
            let monthly_salary =
                prompt_decimal("Monthly salary", Some(Decimal::new(1, 2)), None)?;
            Employee::salaried(name, id, monthly_salary)
        }
        EmployeeKind::HourlyEmployee => {
            let hourly_rate = prompt_decimal("Hourly rate", Some(Decimal::new(1, 2)), None)?;
            let hours_worked =
                prompt_decimal("Hours worked (per week)", Some(Decimal::ZERO), None)?;
            Employee::hourly(name, id, hourly_rate, hours_worked)
        }
        EmployeeKind::CommissionedEmployee => {
            let base_salary = prompt_decimal("Base salary", Some(Decimal::ZERO), None)?;
            let sales_amount = prompt_decimal("Sales amount", Some(Decimal::ZERO), None)?;
            let commission_rate = prompt_decimal(
                "Commission rate (0.0 - 1.0)",
                Some(Decimal::ZERO),
                Some(Decimal::ONE),
            )?;
            Employee::commissioned(name, id, base_salary, sales_amount, commission_rate)
        }
    };

    Ok(employee)
}

/// Builds a list of employees by prompting until the user is done.
///
/// A failure while entering one employee is reported and entry continues.
pub fn build_employees_interactively() -> EngineResult<Vec<Employee>> {
    let mut employees = Vec::new();
    println!("Add employees (type 'done' to finish).");

    loop {
        let answer = prompt_text("Employee type [salaried/hourly/commissioned or 'done']")?;
        let kind = match parse_type_choice(&answer) {
            TypeChoice::Done => break,
            TypeChoice::Kind(kind) => kind,
            TypeChoice::Invalid => {
                println!("Invalid type. Please enter 'salaried', 'hourly', or 'commissioned'.");
                continue;
            }
        };

        match create_employee(kind) {
            Ok(employee) => {
                println!("Added {} (ID {}).", employee.name(), employee.id());
                debug!(employee_id = employee.id(), kind = %kind, "Employee added");
                employees.push(employee);
            }
            Err(err) => println!("Could not add employee: {}", err),
        }
    }

    if employees.is_empty() {
        println!("No employees added.");
    }
    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_type_choice_variants() {
        assert_eq!(
            parse_type_choice("salaried"),
            TypeChoice::Kind(EmployeeKind::SalariedEmployee)
        );
        assert_eq!(
            parse_type_choice("  Hourly "),
            TypeChoice::Kind(EmployeeKind::HourlyEmployee)
        );
        assert_eq!(
            parse_type_choice("COMMISSIONED"),
            TypeChoice::Kind(EmployeeKind::CommissionedEmployee)
        );
    }

    #[test]
    fn test_parse_type_choice_done_words() {
        for word in DONE_WORDS {
            assert_eq!(parse_type_choice(word), TypeChoice::Done, "{}", word);
        }
        assert_eq!(parse_type_choice("Quit"), TypeChoice::Done);
    }

    #[test]
    fn test_parse_type_choice_invalid() {
        assert_eq!(parse_type_choice("contractor"), TypeChoice::Invalid);
        assert_eq!(parse_type_choice(""), TypeChoice::Invalid);
    }

    #[test]
    fn test_parse_bounded_decimal_within_bounds() {
        assert_eq!(
            parse_bounded_decimal("9000", Some(dec("0.01")), None),
            Ok(dec("9000"))
        );
        assert_eq!(
            parse_bounded_decimal("1", Some(Decimal::ZERO), Some(Decimal::ONE)),
            Ok(Decimal::ONE)
        );
    }

    #[test]
    fn test_parse_bounded_decimal_below_minimum() {
        assert_eq!(
            parse_bounded_decimal("0", Some(dec("0.01")), None),
            Err("Please enter a valid number between 0.01 and None.".to_string())
        );
    }

    #[test]
    fn test_parse_bounded_decimal_rejects_garbage() {
        assert!(parse_bounded_decimal("abc", None, None).is_err());
        assert!(parse_bounded_decimal("", None, None).is_err());
    }

    #[test]
    fn test_parse_bounded_id() {
        assert_eq!(parse_bounded_id(" 42 ", Some(0)), Ok(42));
        assert_eq!(parse_bounded_id("0", Some(0)), Ok(0));
        assert_eq!(
            parse_bounded_id("-1", Some(0)),
            Err("Please enter a valid integer between 0 and None.".to_string())
        );
        assert!(parse_bounded_id("1.5", Some(0)).is_err());
    }
}
