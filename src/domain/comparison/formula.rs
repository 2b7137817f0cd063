//! Human-readable trace of the arithmetic behind a comparison.
//!
//! The trace is rendered from the already computed breakdowns, never
//! recomputed, so every number shown matches the result exactly.

use crate::domain::foundation::{HourlyWage, PerMinuteRate};

use super::CostBreakdown;

const HEADER: &str = "Total cost = direct cost + floor(hourly wage / 60) × time (minutes)";

/// One option's line in the trace.
#[derive(Debug, Clone)]
pub(crate) struct FormulaEntry {
    pub label: String,
    pub time_minutes: u64,
    pub breakdown: CostBreakdown,
}

/// Renders the header, the per-minute derivation and one line per option.
pub(crate) fn render_formula(
    wage: HourlyWage,
    rate: PerMinuteRate,
    entries: &[FormulaEntry],
) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(HEADER.to_string());
    lines.push(format!(
        "Per-minute value = floor({} / {}) = {} per minute",
        format_amount(wage.value()),
        PerMinuteRate::MINUTES_PER_HOUR,
        format_amount(rate.value()),
    ));
    for entry in entries {
        lines.push(format!(
            "{}: {} + {} × {} min = {} + {} = {}",
            entry.label,
            format_amount(entry.breakdown.direct_cost),
            format_amount(rate.value()),
            format_amount(entry.time_minutes),
            format_amount(entry.breakdown.direct_cost),
            format_amount(entry.breakdown.time_cost),
            format_amount(entry.breakdown.total_cost),
        ));
    }
    lines.join("\n")
}

/// Format an amount with thousand separators.
pub fn format_amount(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
