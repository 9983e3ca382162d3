//! Dynamic total controller.
//!
//! When the amount of work is not known upfront a bar can be marked dynamic.
//! Once the remaining share of the total drops to the configured trigger
//! percentage, the total is grown by a fixed amount. The condition is checked
//! again on every update, so the total keeps receding ahead of the current
//! position until the caller finalizes it.

use tracing::debug;

/// Auto-increment parameters read from the bar configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoIncrement {
    /// Remaining percentage at or below which the total grows.
    pub trigger: u64,
    /// Amount added to the total each time the trigger fires.
    pub amount: u64,
}

impl AutoIncrement {
    /// Return `true` if `current` has come within `trigger` percent of `total`.
    ///
    /// Computed as `100 * (total - current) <= trigger * total` so that integer
    /// rounding can never arm the trigger early.
    pub fn is_armed(&self, current: u64, total: u64) -> bool {
        let remaining = u128::from(total.saturating_sub(current));
        remaining * 100 <= u128::from(self.trigger) * u128::from(total)
    }
}

/// The mutable total of a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicTotal {
    total: u64,
    finalized: bool,
}

impl DynamicTotal {
    pub(crate) fn new(total: u64) -> Self {
        Self {
            total,
            finalized: false,
        }
    }

    /// The current total.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Return `true` once the caller has declared the total final.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub(crate) fn set(&mut self, total: u64, finalize: bool) {
        self.total = total;
        self.finalized |= finalize;
    }

    /// Grow the total once if `current` has reached the trigger.
    ///
    /// Returns `true` if the total was incremented.
    pub(crate) fn update(&mut self, current: u64, auto: AutoIncrement) -> bool {
        if self.finalized || auto.amount == 0 || !auto.is_armed(current, self.total) {
            return false;
        }

        let previous = self.total;
        self.total = self.total.saturating_add(auto.amount);
        debug!(
            current,
            previous,
            total = self.total,
            trigger = auto.trigger,
            "Auto-incremented bar total"
        );
        true
    }
}
