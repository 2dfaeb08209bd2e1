use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineMetrics {
    pub synergy_index: f64,
    pub synergy_index_label: String,
    pub total_cost: f64,
    pub total_cost_label: String,
    pub budget_remaining: f64,
    pub budget_remaining_label: String,
    pub avg_performance: f64,
    pub avg_performance_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    UnderBudget,
    OnBudget,
    OverBudget,
}

impl BudgetStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderBudget => "Under Budget",
            Self::OnBudget => "On Budget",
            Self::OverBudget => "Over Budget",
        }
    }
}

/// How the team's cost relates to the budget it was generated for. The budget is
/// reconstructed as cost plus remaining.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_budget_label: String,
    pub status: BudgetStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_label: Option<String>,
}

/// One slice of the role-mix chart. Entries keep first-seen role order, which
/// also fixes the color and legend order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMixEntry {
    pub role: String,
    pub count: usize,
    pub share: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    pub position: usize,
    pub employee_id: String,
    pub heading: String,
    pub job_title: String,
    pub role: String,
    pub monthly_cost: f64,
    pub monthly_cost_label: String,
    pub synergy_score: f64,
    pub score_badge: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioEntry {
    pub label: String,
    pub percent: f64,
    pub percent_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDashboard {
    pub team_label: String,
    pub roster_title: String,
    pub headline: HeadlineMetrics,
    pub budget: BudgetOverview,
    pub role_mix: Vec<RoleMixEntry>,
    pub roster: Vec<RosterRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gender_ratio: Vec<RatioEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub education_mix: Vec<String>,
}
