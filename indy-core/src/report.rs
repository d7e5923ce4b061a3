//! Text rendering of the aggregated report

use crate::activity::ActivitySettings;
use crate::format::format_index;
use crate::types::ActivityReport;

const NOTHING_TO_REPORT: &str = "Nothing to report.";
const FENCE: &str = "```";

/// Render enabled activities as fenced sections in canonical order.
///
/// Each section is a `"<name> Cost Index Report:"` header followed by a
/// code fence holding one `name percent` row per system, or
/// `Nothing to report.` when the list is empty. A single blank line
/// precedes the first section and trailing whitespace is trimmed.
pub fn build_report(report: &ActivityReport, activities: &ActivitySettings) -> String {
    let mut out = String::new();

    for (i, config) in activities.iter().filter(|c| c.enabled).enumerate() {
        if i == 0 {
            out.push('\n');
        }

        out.push_str(&format!("{} Cost Index Report:\n\n", config.display_name));
        out.push_str(FENCE);
        out.push('\n');

        match report.get(&config.activity) {
            Some(metrics) if !metrics.is_empty() => {
                for metric in metrics {
                    out.push_str(&format!(
                        "{:<7} {:>8}\n",
                        metric.system_name,
                        format_index(metric.cost_index)
                    ));
                }
            }
            _ => {
                out.push_str(NOTHING_TO_REPORT);
                out.push('\n');
            }
        }

        out.push_str(FENCE);
        out.push_str("\n\n");
    }

    out.trim_end().to_string()
}
