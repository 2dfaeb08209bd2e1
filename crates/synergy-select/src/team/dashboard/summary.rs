use super::super::domain::{Candidate, GenerationResult};
use super::format::{currency, one_decimal, out_of, per_month, percent, plain};
use super::views::{
    BudgetOverview, BudgetStatus, HeadlineMetrics, RatioEntry, RoleMixEntry, RosterRow,
    TeamDashboard,
};
use std::collections::HashMap;

pub const ROLE_PALETTE: [&str; 5] = ["#3b82f6", "#8b5cf6", "#10b981", "#f59e0b", "#ef4444"];
pub const PERFORMANCE_SCALE_MAX: f64 = 5.0;

// Half a cent either way still counts as spending the budget exactly.
const ON_BUDGET_TOLERANCE: f64 = 0.005;

/// Counts candidates per role, in the order each role first appears.
pub fn role_mix(candidates: &[Candidate]) -> Vec<(String, usize)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut mix: Vec<(String, usize)> = Vec::new();

    for candidate in candidates {
        match slots.get(candidate.role.as_str()) {
            Some(&slot) => mix[slot].1 += 1,
            None => {
                slots.insert(candidate.role.as_str(), mix.len());
                mix.push((candidate.role.clone(), 1));
            }
        }
    }

    mix
}

impl GenerationResult {
    pub fn role_mix(&self) -> Vec<(String, usize)> {
        role_mix(&self.candidates)
    }

    /// Derives everything the results view renders. Pure: the same result always
    /// yields the same dashboard.
    pub fn dashboard(&self) -> TeamDashboard {
        let team_size = self.candidates.len();
        let role_mix = role_mix(&self.candidates)
            .into_iter()
            .enumerate()
            .map(|(index, (role, count))| RoleMixEntry {
                role,
                count,
                share: count as f64 / team_size as f64,
                color: ROLE_PALETTE[index % ROLE_PALETTE.len()],
            })
            .collect();

        let roster = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| candidate.roster_row(index + 1))
            .collect();

        let gender_ratio = self
            .gender_ratio
            .iter()
            .flatten()
            .map(|(label, pct)| RatioEntry {
                label: label.clone(),
                percent: *pct,
                percent_label: percent(*pct),
            })
            .collect();

        TeamDashboard {
            team_label: self.team_list.clone(),
            roster_title: format!("Selected Team Roster ({})", self.team_list),
            headline: self.headline(),
            budget: self.budget_overview(),
            role_mix,
            roster,
            gender_ratio,
            education_mix: self.education_mix.clone(),
        }
    }

    fn headline(&self) -> HeadlineMetrics {
        HeadlineMetrics {
            synergy_index: self.synergy_index,
            synergy_index_label: percent(self.synergy_index),
            total_cost: self.total_cost,
            total_cost_label: currency(self.total_cost),
            budget_remaining: self.budget_remaining,
            budget_remaining_label: format!("Remaining: {}", currency(self.budget_remaining)),
            avg_performance: self.avg_performance,
            avg_performance_label: out_of(self.avg_performance, PERFORMANCE_SCALE_MAX),
        }
    }

    fn budget_overview(&self) -> BudgetOverview {
        let total_budget = self.total_cost + self.budget_remaining;
        let status = if self.budget_remaining.abs() < ON_BUDGET_TOLERANCE {
            BudgetStatus::OnBudget
        } else if self.budget_remaining < 0.0 {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::UnderBudget
        };

        let utilization_pct = (total_budget > 0.0).then(|| self.total_cost / total_budget * 100.0);
        let utilization_label =
            utilization_pct.map(|pct| format!("{}% of budget used", one_decimal(pct)));

        BudgetOverview {
            total_budget,
            total_budget_label: currency(total_budget),
            status,
            status_label: status.label(),
            utilization_pct,
            utilization_label,
        }
    }
}

impl Candidate {
    pub fn roster_row(&self, position: usize) -> RosterRow {
        RosterRow {
            position,
            employee_id: self.employee_id.clone(),
            heading: format!("Employee #{} - {}", self.employee_id, self.job_title),
            job_title: self.job_title.clone(),
            role: self.role.clone(),
            monthly_cost: self.salary,
            monthly_cost_label: per_month(self.salary),
            synergy_score: self.synergy_score,
            score_badge: format!("Score: {}", plain(self.synergy_score)),
            rationale: self.explainability.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32, role: &str, salary: f64) -> Candidate {
        Candidate {
            employee_id: id.to_string(),
            job_title: "Engineer".to_string(),
            role: role.to_string(),
            salary,
            synergy_score: 80.5,
            explainability: format!("Selected for {role} role."),
        }
    }

    fn result_with(candidates: Vec<Candidate>) -> GenerationResult {
        let total_cost = candidates.iter().map(|c| c.salary).sum();
        GenerationResult {
            synergy_index: 87.0,
            total_cost,
            budget_remaining: 100_000.0 - total_cost,
            avg_performance: 4.2,
            team_list: "Team-A".to_string(),
            candidates,
            gender_ratio: None,
            education_mix: Vec::new(),
        }
    }

    #[test]
    fn role_mix_keeps_first_seen_order() {
        let candidates = vec![
            candidate(1, "Mid", 5_000.0),
            candidate(2, "Senior", 9_000.0),
            candidate(3, "Mid", 5_500.0),
        ];
        assert_eq!(
            role_mix(&candidates),
            vec![("Mid".to_string(), 2), ("Senior".to_string(), 1)]
        );
    }

    #[test]
    fn role_mix_counts_sum_to_team_size() {
        let roles = [
            "Junior", "Manager", "Senior", "Junior", "Junior", "Senior", "Lead", "Junior",
        ];
        let candidates: Vec<Candidate> = roles
            .iter()
            .enumerate()
            .map(|(index, role)| candidate(index as u32, role, 4_000.0))
            .collect();

        let mix = role_mix(&candidates);
        assert_eq!(mix.iter().map(|(_, count)| count).sum::<usize>(), roles.len());
        let order: Vec<&str> = mix.iter().map(|(role, _)| role.as_str()).collect();
        assert_eq!(order, vec!["Junior", "Manager", "Senior", "Lead"]);
    }

    #[test]
    fn empty_roster_produces_empty_mix() {
        let result = result_with(Vec::new());
        assert!(result.role_mix().is_empty());
        assert!(result.dashboard().role_mix.is_empty());
    }

    #[test]
    fn palette_colors_cycle_by_position() {
        let candidates: Vec<Candidate> = (0..7)
            .map(|index| candidate(index, &format!("Role {index}"), 1_000.0))
            .collect();
        let dashboard = result_with(candidates).dashboard();
        let colors: Vec<&str> = dashboard.role_mix.iter().map(|entry| entry.color).collect();
        assert_eq!(colors[0], ROLE_PALETTE[0]);
        assert_eq!(colors[4], ROLE_PALETTE[4]);
        assert_eq!(colors[5], ROLE_PALETTE[0]);
        assert_eq!(colors[6], ROLE_PALETTE[1]);
    }

    #[test]
    fn dashboard_formats_headline_and_roster() {
        let mut result = result_with(vec![candidate(1, "Senior", 12_000.0)]);
        result.total_cost = 95_000.0;
        result.budget_remaining = 5_000.0;
        result.candidates[0].job_title = "SWE".to_string();
        result.candidates[0].synergy_score = 9.1;

        let dashboard = result.dashboard();
        assert_eq!(dashboard.headline.synergy_index_label, "87%");
        assert_eq!(dashboard.headline.total_cost_label, "$95,000");
        assert_eq!(dashboard.headline.budget_remaining_label, "Remaining: $5,000");
        assert_eq!(dashboard.headline.avg_performance_label, "4.2 / 5.0");
        assert_eq!(dashboard.roster_title, "Selected Team Roster (Team-A)");

        let row = &dashboard.roster[0];
        assert_eq!(row.position, 1);
        assert_eq!(row.heading, "Employee #1 - SWE");
        assert_eq!(row.monthly_cost_label, "$12,000/mo");
        assert_eq!(row.score_badge, "Score: 9.1");
        assert_eq!(row.rationale, "Selected for Senior role.");

        assert_eq!(dashboard.budget.total_budget, 100_000.0);
        assert_eq!(dashboard.budget.status, BudgetStatus::UnderBudget);
        assert_eq!(
            dashboard.budget.utilization_label.as_deref(),
            Some("95% of budget used")
        );
    }

    #[test]
    fn negative_remaining_reports_overrun() {
        let mut result = result_with(vec![candidate(1, "Senior", 12_000.0)]);
        result.total_cost = 52_000.0;
        result.budget_remaining = -2_000.0;

        let dashboard = result.dashboard();
        assert_eq!(dashboard.budget.status, BudgetStatus::OverBudget);
        assert_eq!(dashboard.budget.status_label, "Over Budget");
        assert_eq!(dashboard.headline.budget_remaining_label, "Remaining: -$2,000");
        assert_eq!(dashboard.budget.total_budget_label, "$50,000");
        assert_eq!(
            dashboard.budget.utilization_label.as_deref(),
            Some("104% of budget used")
        );
    }

    #[test]
    fn exact_spend_is_on_budget() {
        let mut result = result_with(vec![candidate(1, "Senior", 12_000.0)]);
        result.total_cost = 100_000.0;
        result.budget_remaining = 0.0;
        assert_eq!(result.dashboard().budget.status, BudgetStatus::OnBudget);
    }

    #[test]
    fn roster_preserves_received_order() {
        let result = result_with(vec![
            candidate(30, "Junior", 3_000.0),
            candidate(10, "Manager", 11_000.0),
            candidate(20, "Senior", 8_000.0),
        ]);
        let ids: Vec<String> = result
            .dashboard()
            .roster
            .into_iter()
            .map(|row| row.employee_id)
            .collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    #[test]
    fn aggregation_is_idempotent_and_leaves_input_untouched() {
        let mut result = result_with(vec![
            candidate(1, "Mid", 5_000.0),
            candidate(2, "Senior", 9_000.0),
            candidate(3, "Mid", 5_500.0),
        ]);
        let mut ratio = std::collections::BTreeMap::new();
        ratio.insert("Male".to_string(), 66.7);
        ratio.insert("Female".to_string(), 33.3);
        result.gender_ratio = Some(ratio);

        let snapshot = result.clone();
        let first = result.dashboard();
        let second = result.dashboard();
        assert_eq!(first, second);
        assert_eq!(result, snapshot);

        let labels: Vec<&str> = first.gender_ratio.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Female", "Male"]);
    }

    #[test]
    fn empty_demographics_are_left_out_of_serialized_dashboard() {
        let result = result_with(vec![candidate(1, "Senior", 12_000.0)]);
        let value = serde_json::to_value(result.dashboard()).expect("serializes");
        assert!(value.get("gender_ratio").is_none());
        assert!(value.get("education_mix").is_none());
        assert_eq!(value["budget"]["status"], "under_budget");
    }
}
