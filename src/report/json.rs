//! JSON report

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::mix::MixPlan;

use super::ReportResult;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generator: String,
    #[serde(flatten)]
    plan: &'a MixPlan,
}

/// Pretty-printed plan with a generator stamp
pub fn format_json(plan: &MixPlan) -> ReportResult<String> {
    let report = JsonReport {
        generator: BuildInfo::current().short(),
        plan,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
