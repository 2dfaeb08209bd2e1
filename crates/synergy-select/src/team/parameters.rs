use super::domain::{
    Department, GenerationRequest, UnknownDepartment, BUDGET_MAX, BUDGET_MIN, BUDGET_STEP,
    TEAM_SIZE_MAX, TEAM_SIZE_MIN,
};

const DEFAULT_TEAM_SIZE: u32 = 12;
const DEFAULT_TOTAL_BUDGET: f64 = 100_000.0;

/// Editable generation parameters, mirroring the three form controls.
///
/// Team size is clamped by the control itself. The budget field accepts any typed
/// number, but [`ParameterCollector::to_request`] refuses to build a request until
/// the budget is back inside `[BUDGET_MIN, BUDGET_MAX]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterCollector {
    department: Department,
    team_size: u32,
    total_budget: f64,
}

impl Default for ParameterCollector {
    fn default() -> Self {
        Self {
            department: Department::default(),
            team_size: DEFAULT_TEAM_SIZE,
            total_budget: DEFAULT_TOTAL_BUDGET,
        }
    }
}

impl ParameterCollector {
    pub fn new() -> Self {
        Self::default()
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

    pub fn select_department(&mut self, department: Department) {
        self.department = department;
    }

    pub fn select_department_label(&mut self, label: &str) -> Result<Department, ParameterError> {
        let department: Department = label.parse()?;
        self.department = department;
        Ok(department)
    }

    /// Moves the team size slider, clamping into `[TEAM_SIZE_MIN, TEAM_SIZE_MAX]`.
    pub fn set_team_size(&mut self, size: i64) -> u32 {
        let clamped = size.clamp(i64::from(TEAM_SIZE_MIN), i64::from(TEAM_SIZE_MAX));
        self.team_size = clamped as u32;
        self.team_size
    }

    /// Applies raw slider/text input. A leading integer is honored and the rest of
    /// the text ignored, so `"12.7"` becomes 12.
    pub fn enter_team_size(&mut self, raw: &str) -> Result<u32, ParameterError> {
        let size = leading_integer(raw).ok_or_else(|| ParameterError::InvalidTeamSize {
            input: raw.to_string(),
        })?;
        Ok(self.set_team_size(size))
    }

    pub fn set_total_budget(&mut self, amount: f64) -> Result<(), ParameterError> {
        if !amount.is_finite() {
            return Err(ParameterError::InvalidBudget {
                input: amount.to_string(),
            });
        }
        self.total_budget = amount;
        Ok(())
    }

    pub fn enter_total_budget(&mut self, raw: &str) -> Result<f64, ParameterError> {
        let amount = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| ParameterError::InvalidBudget {
                input: raw.to_string(),
            })?;
        self.total_budget = amount;
        Ok(amount)
    }

    pub fn step_budget_up(&mut self) -> f64 {
        self.total_budget = (self.total_budget + BUDGET_STEP).clamp(BUDGET_MIN, BUDGET_MAX);
        self.total_budget
    }

    pub fn step_budget_down(&mut self) -> f64 {
        self.total_budget = (self.total_budget - BUDGET_STEP).clamp(BUDGET_MIN, BUDGET_MAX);
        self.total_budget
    }

    pub fn budget_in_range(&self) -> bool {
        (BUDGET_MIN..=BUDGET_MAX).contains(&self.total_budget)
    }

    /// Live label shown next to the team size slider.
    pub fn team_size_label(&self) -> String {
        format!("Team Size ({})", self.team_size)
    }

    pub fn to_request(&self) -> Result<GenerationRequest, ParameterError> {
        GenerationRequest::new(self.department, self.team_size, self.total_budget)
    }

    /// Packages the current fields and hands them to `on_submit`.
    pub fn submit<F, R>(&self, on_submit: F) -> Result<R, ParameterError>
    where
        F: FnOnce(GenerationRequest) -> R,
    {
        let request = self.to_request()?;
        Ok(on_submit(request))
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate absurdly long inputs; the slider clamps them anyway.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error(transparent)]
    Department(#[from] UnknownDepartment),
    #[error("team size '{input}' is not a whole number")]
    InvalidTeamSize { input: String },
    #[error("team size {size} must be between 3 and 30")]
    TeamSizeOutOfRange { size: u32 },
    #[error("total budget '{input}' is not a number")]
    InvalidBudget { input: String },
    #[error("total budget {amount} must be between 10000 and 1000000")]
    BudgetOutOfRange { amount: f64 },
}
