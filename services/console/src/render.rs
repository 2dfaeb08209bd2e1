use std::fmt::{self, Write};
use synergy_select::team::TeamDashboard;

pub(crate) fn dashboard_text(dashboard: &TeamDashboard) -> String {
    let mut out = String::new();
    write_dashboard(&mut out, dashboard).expect("formatting into a String cannot fail");
    out
}

fn write_dashboard(out: &mut impl Write, dashboard: &TeamDashboard) -> fmt::Result {
    let headline = &dashboard.headline;
    let budget = &dashboard.budget;

    writeln!(out, "Team recommendation")?;
    writeln!(out, "- Synergy Index: {}", headline.synergy_index_label)?;
    writeln!(
        out,
        "- Total Cost: {} ({})",
        headline.total_cost_label, headline.budget_remaining_label
    )?;
    writeln!(out, "- Avg Performance: {}", headline.avg_performance_label)?;
    match &budget.utilization_label {
        Some(utilization) => writeln!(
            out,
            "- Budget: {} of {} | {}",
            budget.status_label, budget.total_budget_label, utilization
        )?,
        None => writeln!(
            out,
            "- Budget: {} of {}",
            budget.status_label, budget.total_budget_label
        )?,
    }

    writeln!(out, "\nSeniority mix")?;
    for entry in &dashboard.role_mix {
        writeln!(
            out,
            "  - {}: {} ({:.0}%) [{}]",
            entry.role,
            entry.count,
            entry.share * 100.0,
            entry.color
        )?;
    }

    if !dashboard.gender_ratio.is_empty() {
        let ratios: Vec<String> = dashboard
            .gender_ratio
            .iter()
            .map(|entry| format!("{} {}", entry.label, entry.percent_label))
            .collect();
        writeln!(out, "Gender ratio: {}", ratios.join(" | "))?;
    }
    if !dashboard.education_mix.is_empty() {
        writeln!(out, "Education mix: {}", dashboard.education_mix.join(", "))?;
    }

    writeln!(out, "\n{}", dashboard.roster_title)?;
    for row in &dashboard.roster {
        writeln!(out, "{}. {} [{}]", row.position, row.heading, row.score_badge)?;
        writeln!(out, "   Role: {} | Cost: {}", row.role, row.monthly_cost_label)?;
        writeln!(out, "   {}", row.rationale)?;
    }

    Ok(())
}
