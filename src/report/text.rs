//! Plain-text report for terminal output

use crate::mix::MixPlan;

const RULE_WIDTH: usize = 46;

/// Human-readable table: per-sample recipe, totals, then the grand total
pub fn format_report(plan: &MixPlan) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        format!(
            "Samples: {} | Excess: {:.1}% | Mix: {}",
            plan.sample_count, plan.excess_percent, plan.mix
        ),
        format!("Per-sample total volume: {:.1} µL", plan.per_sample_total_ul),
        rule.clone(),
        "Per-sample recipe:".to_string(),
    ];

    for v in plan.per_sample.iter() {
        lines.push(format!("  {:<16} = {:.1} µL", v.component.label(plan.mix), v.volume_ul));
    }

    lines.push(rule.clone());
    lines.push("Totals to prepare (rounded to 0.5 µL):".to_string());

    for v in plan.totals.iter() {
        lines.push(format!("  {:<16} = {:.1} µL", v.component.label(plan.mix), v.volume_ul));
    }

    lines.push(rule);
    lines.push(format!("TOTAL master mix       = {:.1} µL", plan.grand_total_ul));

    lines.join("\n")
}
