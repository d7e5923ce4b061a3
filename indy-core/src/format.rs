//! Percentage formatting for cost indices

/// Render a fractional cost index as a percentage with two decimals.
///
/// No clamping is applied; `0.15` becomes `15.00%` and `-0.01` becomes `-1.00%`.
pub fn format_index(index: f64) -> String {
    format!("{:.2}%", index * 100.0)
}
