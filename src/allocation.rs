//! Allocation engine: pure functions from a ledger snapshot to shares and splits.
//!
//! Nothing here holds state. The presentation layer calls these once per
//! displayed cell, so they must stay cheap and total: a zero total earning
//! yields `0.0` rather than a division error, and NaN inputs degrade only the
//! values they touch.

/// A participant's earning as a percentage of the total earning.
///
/// `0.0` when `total_earning` is zero. Unclamped: negative earnings in the set
/// can push a share below 0% or above 100%, which is accepted behavior.
pub fn share_percentage(earning: f64, total_earning: f64) -> f64 {
    if total_earning == 0.0 {
        return 0.0;
    }
    earning / total_earning * 100.0
}

/// The amount one participant owes toward one expense, proportional to their
/// earning.
///
/// `0.0` when `total_earning` is zero. The raw value is returned; display code
/// applies [`round_to_cents`] or [`format_amount`] per cell, so the sum of the
/// displayed cells may drift from the expense amount by a few cents. That
/// drift is accepted, not corrected.
pub fn expense_split(amount: f64, total_earning: f64, earning: f64) -> f64 {
    if total_earning == 0.0 {
        return 0.0;
    }
    amount / total_earning * earning
}

/// Round to the nearest hundredth, ties away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a monetary value with exactly two fractional digits.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}
