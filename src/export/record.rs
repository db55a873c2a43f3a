//! Flat employee records for export.
//!
//! [`EmployeeRecord`] is the shape shared by both sinks: the structured sink
//! serializes it with absent fields omitted, the flat sink lays it out over
//! the fixed [`CSV_COLUMNS`] with blank cells.
//!
//! Amounts are written as JSON numbers carrying the exact decimal digits.
//! Reading accepts numbers or numeric strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CommissionedEmployee, Compensation, Employee, EmployeeKind, HourlyEmployee, SalariedEmployee,
};

/// Columns written by the flat sink, in order.
pub const CSV_COLUMNS: [&str; 9] = [
    "type",
    "name",
    "id",
    "monthly_salary",
    "hourly_rate",
    "hours_worked",
    "base_salary",
    "sales_amount",
    "commission_rate",
];

/// A flat key/value view of an employee tagged with its variant.
///
/// Only the fields of the tagged variant are `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The variant discriminator.
    #[serde(rename = "type")]
    pub kind: EmployeeKind,
    /// The employee's name.
    pub name: String,
    /// The employee's identifier.
    pub id: i64,
    /// Salaried: fixed monthly amount.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub monthly_salary: Option<Decimal>,
    /// Hourly: rate per hour.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub hourly_rate: Option<Decimal>,
    /// Hourly: hours worked in one week.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub hours_worked: Option<Decimal>,
    /// Commissioned: base salary.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub base_salary: Option<Decimal>,
    /// Commissioned: sales made.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub sales_amount: Option<Decimal>,
    /// Commissioned: fraction of sales paid as commission.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub commission_rate: Option<Decimal>,
}

/// Maps an employee to its flat record.
///
/// Never fails: fields are copied as stored, valid or not.
///
/// # Examples
///
/// ```
/// use payroll_engine::export::to_record;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let record = to_record(&Employee::hourly("Bob", 2, Decimal::from(25), Decimal::from(45)));
/// let json = serde_json::to_value(&record).unwrap();
///
/// assert_eq!(json["type"], "HourlyEmployee");
/// assert!(json.get("monthly_salary").is_none());
/// ```
pub fn to_record(employee: &Employee) -> EmployeeRecord {
    let mut record = EmployeeRecord {
        kind: employee.kind(),
        name: employee.name().to_string(),
        id: employee.id(),
        monthly_salary: None,
        hourly_rate: None,
        hours_worked: None,
        base_salary: None,
        sales_amount: None,
        commission_rate: None,
    };

    match employee.compensation() {
        Compensation::Salaried(terms) => {
            record.monthly_salary = Some(terms.monthly_salary);
        }
        Compensation::Hourly(terms) => {
            record.hourly_rate = Some(terms.hourly_rate);
            record.hours_worked = Some(terms.hours_worked);
        }
        Compensation::Commissioned(terms) => {
            record.base_salary = Some(terms.base_salary);
            record.sales_amount = Some(terms.sales_amount);
            record.commission_rate = Some(terms.commission_rate);
        }
    }

    record
}

impl EmployeeRecord {
    /// Lays the record out over [`CSV_COLUMNS`], blank where a field is absent.
    pub fn csv_row(&self) -> [String; 9] {
        let cell = |value: Option<Decimal>| value.map(|d| d.to_string()).unwrap_or_default();
        [
            self.kind.to_string(),
            self.name.clone(),
            self.id.to_string(),
            cell(self.monthly_salary),
            cell(self.hourly_rate),
            cell(self.hours_worked),
            cell(self.base_salary),
            cell(self.sales_amount),
            cell(self.commission_rate),
        ]
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        to_record(employee)
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EngineError;

    /// Rebuilds an employee from a record, requiring every field of its variant.
    fn try_from(record: EmployeeRecord) -> EngineResult<Self> {
        let compensation = match record.kind {
            EmployeeKind::SalariedEmployee => Compensation::Salaried(SalariedEmployee {
                monthly_salary: required(record.monthly_salary, "monthly_salary", record.id)?,
            }),
            EmployeeKind::HourlyEmployee => Compensation::Hourly(HourlyEmployee {
                hourly_rate: required(record.hourly_rate, "hourly_rate", record.id)?,
                hours_worked: required(record.hours_worked, "hours_worked", record.id)?,
            }),
            EmployeeKind::CommissionedEmployee => {
                Compensation::Commissioned(CommissionedEmployee {
                    base_salary: required(record.base_salary, "base_salary", record.id)?,
                    sales_amount: required(record.sales_amount, "sales_amount", record.id)?,
                    commission_rate: required(
                        record.commission_rate,
                        "commission_rate",
                        record.id,
                    )?,
                })
            }
        };

        Ok(Employee::new(record.name, record.id, compensation))
    }
}

fn required(value: Option<Decimal>, field: &str, id: i64) -> EngineResult<Decimal> {
    value.ok_or_else(|| {
        EngineError::invalid_input(field, format!("missing for employee with id {}", id))
    })
}
