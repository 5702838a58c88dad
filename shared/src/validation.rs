//! Input coercion for the IrriSmart query operations
//!
//! Query inputs are never rejected: out-of-range values are coerced into the
//! supported domain instead.

/// Number of history points returned when the caller does not ask for more
pub const DEFAULT_HISTORY_DAYS: usize = 14;

/// Largest history slice a caller may request
pub const MAX_HISTORY_DAYS: usize = 14;

/// Smallest history slice a caller may request
pub const MIN_HISTORY_DAYS: usize = 1;

// ============================================================================
// History Window
// ============================================================================

/// Coerce a numeric day count: non-finite values fall back to the default,
/// anything else is clamped to 1-14 and truncated.
pub fn coerce_history_days(days: f64) -> usize {
    if !days.is_finite() {
        return DEFAULT_HISTORY_DAYS;
    }
    days.clamp(MIN_HISTORY_DAYS as f64, MAX_HISTORY_DAYS as f64)
        .trunc() as usize
}

/// Coerce a raw `days` query value.
/// Missing or unparsable input yields the default; a blank value counts as 0.
pub fn normalize_history_days(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_HISTORY_DAYS;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return coerce_history_days(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(days) => coerce_history_days(days),
        Err(_) => DEFAULT_HISTORY_DAYS,
    }
}

// ============================================================================
// Plot Selection
// ============================================================================

/// Treat an empty or blank plot id as absent
pub fn normalize_plot_id(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|id| !id.is_empty())
}
