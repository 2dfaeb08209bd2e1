use super::parameters::ParameterError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const TEAM_SIZE_MIN: u32 = 3;
pub const TEAM_SIZE_MAX: u32 = 30;
pub const BUDGET_MIN: f64 = 10_000.0;
pub const BUDGET_MAX: f64 = 1_000_000.0;
pub const BUDGET_STEP: f64 = 1_000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[default]
    Engineering,
    Sales,
    Marketing,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Finance,
    #[serde(rename = "HR")]
    Hr,
    Legal,
    Operations,
    #[serde(rename = "IT")]
    It,
}

impl Department {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Engineering,
            Self::Sales,
            Self::Marketing,
            Self::CustomerSupport,
            Self::Finance,
            Self::Hr,
            Self::Legal,
            Self::Operations,
            Self::It,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::CustomerSupport => "Customer Support",
            Self::Finance => "Finance",
            Self::Hr => "HR",
            Self::Legal => "Legal",
            Self::Operations => "Operations",
            Self::It => "IT",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownDepartment(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department '{0}' (expected one of: Engineering, Sales, Marketing, Customer Support, Finance, HR, Legal, Operations, IT)")]
pub struct UnknownDepartment(pub String);

/// Payload posted to the generation service. Fields are private and every
/// constructor goes through [`GenerationRequest::new`], so the bounds on
/// `team_size` and `total_budget` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    department: Department,
    team_size: u32,
    total_budget: f64,
}

impl GenerationRequest {
    pub fn new(
        department: Department,
        team_size: u32,
        total_budget: f64,
    ) -> Result<Self, ParameterError> {
        if !(TEAM_SIZE_MIN..=TEAM_SIZE_MAX).contains(&team_size) {
            return Err(ParameterError::TeamSizeOutOfRange { size: team_size });
        }
        if !total_budget.is_finite() {
            return Err(ParameterError::InvalidBudget {
                input: total_budget.to_string(),
            });
        }
        if !(BUDGET_MIN..=BUDGET_MAX).contains(&total_budget) {
            return Err(ParameterError::BudgetOutOfRange {
                amount: total_budget,
            });
        }

        Ok(Self {
            department,
            team_size,
            total_budget,
        })
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }
}

/// Team recommendation returned by the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(rename = "Synergy_Index")]
    pub synergy_index: f64,
    #[serde(rename = "Total_Cost")]
    pub total_cost: f64,
    #[serde(rename = "Budget_Remaining")]
    pub budget_remaining: f64,
    #[serde(rename = "Avg_Performance")]
    pub avg_performance: f64,
    #[serde(rename = "Team_List", deserialize_with = "deserialize_label")]
    pub team_list: String,
    #[serde(rename = "Candidates")]
    pub candidates: Vec<Candidate>,
    #[serde(
        rename = "Gender_Ratio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gender_ratio: Option<BTreeMap<String, f64>>,
    #[serde(
        rename = "Education_Mix",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub education_mix: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "Employee_ID", deserialize_with = "deserialize_label")]
    pub employee_id: String,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "SynergyScore")]
    pub synergy_score: f64,
    #[serde(rename = "Explainability")]
    pub explainability: String,
}

/// Identifiers arrive as either JSON strings or numbers; both are kept as text.
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Integer(i64),
        Decimal(f64),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(text) => text,
        Label::Integer(value) => value.to_string(),
        Label::Decimal(value) => value.to_string(),
    })
}
