//! Minimum-move arithmetic.
//!
//! Moving `n` disks takes at least `T(n)` moves, where
//!
//! ```text
//! T(0) = 0
//! T(1) = 1
//! T(n) = 2 * T(n - 1) + 1    (n > 1)
//! ```
//!
//! which has the closed form `T(n) = 2^n - 1`. The engine scores games with the
//! closed form; the recurrence is kept so the two can be checked against each
//! other.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Minimum number of moves for `n` disks, closed form.
///
/// Saturates at `u64::MAX` (reached exactly at `n = 64`).
pub fn minimum_moves(n: u32) -> u64 {
    1u64.checked_shl(n).map_or(u64::MAX, |power| power - 1)
}

/// Minimum number of moves for `n` disks, computed by the recurrence.
pub fn minimum_moves_recursive(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => minimum_moves_recursive(n - 1).saturating_mul(2).saturating_add(1),
    }
}

/// Renders `T(n) = 2^n - 1 = m`.
pub fn formula(n: u32) -> String {
    format!("T({n}) = 2^{n} - 1 = {}", minimum_moves(n))
}

/// Result of checking the closed form against the recurrence for one `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FormulaCheck {
    /// Number of disks.
    n: u32,
    /// `2^n - 1`.
    closed_form: u64,
    /// `2 * T(n - 1) + 1`.
    recursive_form: u64,
    /// Whether both forms agree.
    valid: bool,
    /// Human-readable formula.
    formula: String,
    /// Time to play the minimum moves at one move per second.
    time_estimate: String,
}

/// Computes both forms for `n` and reports whether they agree.
#[instrument]
pub fn validate_formulas(n: u32) -> FormulaCheck {
    let closed_form = minimum_moves(n);
    let recursive_form = minimum_moves_recursive(n);
    FormulaCheck {
        n,
        closed_form,
        recursive_form,
        valid: closed_form == recursive_form,
        formula: formula(n),
        time_estimate: time_estimate(closed_form),
    }
}

/// Validation records for `n = 1..=max`.
#[instrument]
pub fn formula_table(max: u32) -> Vec<FormulaCheck> {
    (1..=max).map(validate_formulas).collect()
}

/// Formats a number of seconds the way a player would say it: `45s`,
/// `2m 7s`, `1h 8m`, `3d 2h`.
pub fn time_estimate(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    if seconds < MINUTE {
        format!("{seconds}s")
    } else if seconds < HOUR {
        format!("{}m {}s", seconds / MINUTE, seconds % MINUTE)
    } else if seconds < DAY {
        format!("{}h {}m", seconds / HOUR, (seconds % HOUR) / MINUTE)
    } else {
        format!("{}d {}h", seconds / DAY, (seconds % DAY) / HOUR)
    }
}
