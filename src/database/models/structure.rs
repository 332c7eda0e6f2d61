use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format::{optional_timestamp, timestamp};
use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Country as "countryenum" {
        Uae => "UAE",
        Ksa => "KSA",
        India => "India",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ComponentType as "componenttypeenum" {
        Earning => "earning",
        Deduction => "deduction",
        Benefit => "benefit",
    }
}

string_enum! {
    /// How a component's amount is meant to be computed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RuleType as "ruletypeenum" {
        Fixed => "fixed",
        Percentage => "percentage",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SalaryStructure {
    pub id: i32,
    pub name: String,
    pub country: Country,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>, // TIMESTAMPTZ
    #[serde(with = "optional_timestamp", default)]
    pub updated_at: Option<DateTime<Utc>>, // NULL until the first update
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompensationComponent {
    pub id: i32,
    pub structure_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub component_type: ComponentType,
    pub rule_type: Option<RuleType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationComponentInput {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default)]
    pub rule_type: Option<RuleType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureInput {
    pub name: String,
    pub country: Country,
    pub components: Vec<CompensationComponentInput>,
}

/// A structure together with its component rows, as returned by every
/// structure endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureWithComponents {
    #[serde(flatten)]
    pub structure: SalaryStructure,
    pub components: Vec<CompensationComponent>,
}

impl SalaryStructureWithComponents {
    pub fn new(structure: SalaryStructure, components: Vec<CompensationComponent>) -> Self {
        Self {
            structure,
            components,
        }
    }

    pub fn component_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.components.iter().map(|component| component.id)
    }
}
