//! Markdown report, for saving alongside lab notes

use crate::mix::{MixPlan, Recipe};

/// Two tables under headings: the per-sample recipe and the batch totals
pub fn format_markdown(plan: &MixPlan) -> String {
    let mut out = String::new();

    out.push_str("# PCR Master Mix\n\n");
    out.push_str(&format!("- Samples: {}\n", plan.sample_count));
    out.push_str(&format!("- Excess: {:.1}%\n", plan.excess_percent));
    out.push_str(&format!("- Mix: {}\n", plan.mix));
    out.push_str(&format!(
        "- Per-sample total volume: {:.1} µL\n\n",
        plan.per_sample_total_ul
    ));

    out.push_str("## Per-sample recipe\n\n");
    push_table(&mut out, &plan.per_sample, None);

    out.push_str("\n## Totals to prepare (rounded to 0.5 µL)\n\n");
    push_table(&mut out, &plan.totals, Some(plan.grand_total_ul));

    out
}

fn push_table(out: &mut String, recipe: &Recipe, grand_total: Option<f64>) {
    out.push_str("| Component | Volume (µL) |\n");
    out.push_str("|:----------|------------:|\n");
    for v in recipe.iter() {
        out.push_str(&format!(
            "| {} | {:.1} |\n",
            v.component.name(recipe.mix),
            v.volume_ul
        ));
    }
    if let Some(total) = grand_total {
        out.push_str(&format!("| **TOTAL master mix** | **{:.1}** |\n", total));
    }
}
