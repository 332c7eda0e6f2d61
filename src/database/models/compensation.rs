use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::format::{decimal, optional_timestamp, timestamp};

/// One dated assignment of an employee to a salary structure.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeCompensation {
    pub id: i32,
    pub employee_id: String, // opaque, not a foreign key
    pub structure_id: i32,
    pub effective_from: NaiveDate, // DATE
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "optional_timestamp", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeComponentValue {
    pub id: i32,
    pub employee_compensation_id: i32,
    pub component_id: i32,
    #[serde(with = "decimal")]
    pub value: BigDecimal, // NUMERIC
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeComponentValueInput {
    pub component_id: i32,
    #[serde(with = "decimal")]
    pub value: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCompensationInput {
    pub employee_id: String,
    pub structure_id: i32,
    pub effective_from: NaiveDate,
    pub component_values: Vec<EmployeeComponentValueInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCompensationWithValues {
    #[serde(flatten)]
    pub compensation: EmployeeCompensation,
    pub component_values: Vec<EmployeeComponentValue>,
}

impl EmployeeCompensationWithValues {
    pub fn new(
        compensation: EmployeeCompensation,
        component_values: Vec<EmployeeComponentValue>,
    ) -> Self {
        Self {
            compensation,
            component_values,
        }
    }
}
