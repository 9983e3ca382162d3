//! The configuration record and runtime state of a single bar.
//!
//! A [`BarState`] is created with documented defaults, shaped by an ordered
//! list of [`BarOption`]s, and from then on only its running state changes:
//! the position, the smoothed rate and the (possibly dynamic) total.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use barstate::bar::{BarOption, BarState};
//!
//! let mut state = BarState::with_options(100, [
//!     BarOption::AutoIncrTotal { trigger: 10, amount: 20 },
//! ]);
//!
//! state.report(Duration::from_secs(1), 90);
//! assert_eq!(state.current_total(), 120);
//! ```

use super::option::{apply_options, BarOption};
use crate::decor::{DecoratorList, Statistics};
use crate::error::{Error, Result};
use crate::estimate::{AutoIncrement, DynamicTotal, Eta, EtaAccumulator};
use crate::progress::BarGlyphs;

use std::time::Duration;
use tracing::{debug, trace};

/// Configuration record and running state of one bar.
///
/// Structural fields are set by [`apply_options`] and only exposed read-only
/// afterwards. Runtime state advances through [`report`](Self::report),
/// [`set_total`](Self::set_total) and [`complete`](Self::complete). None of
/// these lock; the owner is expected to serialize updates per bar.
#[derive(Debug, Clone)]
pub struct BarState {
    pub(crate) id: usize,
    pub(crate) width: usize,
    pub(crate) trim_left_space: bool,
    pub(crate) trim_right_space: bool,
    pub(crate) eta_alpha: f64,
    pub(crate) dynamic: bool,
    pub(crate) total_auto_incr_trigger: u64,
    pub(crate) total_auto_incr_by: u64,
    pub(crate) remove_on_complete: bool,
    pub(crate) glyphs: BarGlyphs,
    pub(crate) prepend_decorators: DecoratorList,
    pub(crate) append_decorators: DecoratorList,

    current: u64,
    elapsed: Duration,
    completed: bool,
    eta: EtaAccumulator,
    total: DynamicTotal,
}

impl Default for BarState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl BarState {
    /// Default ETA smoothing factor.
    pub const DEFAULT_ETA_ALPHA: f64 = 0.25;

    /// Create a record with the default configuration and the given total.
    pub fn new(total: u64) -> Self {
        Self {
            id: 0,
            width: 0,
            trim_left_space: false,
            trim_right_space: false,
            eta_alpha: Self::DEFAULT_ETA_ALPHA,
            dynamic: false,
            total_auto_incr_trigger: 0,
            total_auto_incr_by: 0,
            remove_on_complete: false,
            glyphs: BarGlyphs::default(),
            prepend_decorators: DecoratorList::default(),
            append_decorators: DecoratorList::default(),
            current: 0,
            elapsed: Duration::ZERO,
            completed: false,
            eta: EtaAccumulator::new(),
            total: DynamicTotal::new(total),
        }
    }

    /// Create a record and apply `options` to it, in order.
    pub fn with_options<I>(total: u64, options: I) -> Self
    where
        I: IntoIterator<Item = BarOption>,
    {
        apply_options(Self::new(total), options)
    }

    /// Check the configuration for values the runtime cannot make sense of.
    ///
    /// Applying options never validates; this is the opt-in check.
    pub fn validate(&self) -> Result<()> {
        if !(self.eta_alpha > 0.0 && self.eta_alpha <= 1.0) {
            return Err(Error::InvalidEtaAlpha(self.eta_alpha));
        }
        if self.total_auto_incr_trigger > 100 {
            return Err(Error::InvalidTrigger(self.total_auto_incr_trigger));
        }
        if self.dynamic && self.total_auto_incr_trigger > 0 && self.total_auto_incr_by == 0 {
            return Err(Error::ZeroIncrement);
        }
        self.glyphs.validate()
    }

    /// Feed one progress update: `work` units done over `elapsed`.
    ///
    /// Advances the position, folds the sample into the ETA average and lets
    /// the dynamic total grow if its trigger is reached. Updates on a
    /// completed bar are ignored.
    pub fn report(&mut self, elapsed: Duration, work: u64) {
        if self.completed {
            trace!(id = self.id, work, "Ignoring report on completed bar");
            return;
        }

        self.current = self.current.saturating_add(work);
        self.elapsed = self.elapsed.saturating_add(elapsed);
        self.eta.sample(self.eta_alpha, elapsed, work);

        if self.grows() {
            self.total.update(self.current, self.auto_increment());
        } else if self.current >= self.total.total() {
            self.current = self.total.total();
            self.completed = true;
            debug!(id = self.id, total = self.current, "Bar completed");
        }
    }

    /// Replace the total. With `finalize`, dynamic growth stops for good and the
    /// bar completes once the position reaches the new total.
    pub fn set_total(&mut self, total: u64, finalize: bool) {
        if self.completed {
            return;
        }
        self.total.set(total, finalize);
        if !self.grows() && self.current >= total {
            self.current = total;
            self.completed = true;
            debug!(id = self.id, total, "Bar completed");
        }
    }

    /// Mark the bar complete at its current total.
    pub fn complete(&mut self) {
        if self.completed {
            return;
        }
        self.total.set(self.total.total(), true);
        self.current = self.total.total();
        self.completed = true;
        debug!(id = self.id, total = self.current, "Bar completed");
    }

    /// Smoothed time remaining.
    pub fn current_eta(&self) -> Eta {
        if self.completed {
            return Eta::Known(Duration::ZERO);
        }
        self.eta.estimate(self.current, self.total.total())
    }

    /// Current total, including any dynamic growth.
    pub fn current_total(&self) -> u64 {
        self.total.total()
    }

    /// Current position.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Sum of the elapsed time of all reports.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Return `true` once the bar has reached its final total.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Snapshot handed to decorators.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            id: self.id,
            completed: self.completed,
            total: self.current_total(),
            current: self.current,
            elapsed: self.elapsed,
            eta: self.current_eta(),
        }
    }

    /// The ETA smoothing state.
    pub fn eta_accumulator(&self) -> &EtaAccumulator {
        &self.eta
    }

    /// The total controller.
    pub fn dynamic_total(&self) -> &DynamicTotal {
        &self.total
    }

    /// The auto-increment parameters as configured.
    pub fn auto_increment(&self) -> AutoIncrement {
        AutoIncrement {
            trigger: self.total_auto_incr_trigger,
            amount: self.total_auto_incr_by,
        }
    }

    fn grows(&self) -> bool {
        self.dynamic && !self.total.is_finalized()
    }

    /// Bar id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Track width in columns, `0` meaning the renderer picks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the space left of the track is dropped.
    pub fn trim_left_space(&self) -> bool {
        self.trim_left_space
    }

    /// Whether the space right of the track is dropped.
    pub fn trim_right_space(&self) -> bool {
        self.trim_right_space
    }

    /// ETA smoothing factor.
    pub fn eta_alpha(&self) -> f64 {
        self.eta_alpha
    }

    /// Whether the total may change while the bar runs.
    pub fn dynamic(&self) -> bool {
        self.dynamic
    }

    /// Remaining percentage at or below which the total grows.
    pub fn total_auto_incr_trigger(&self) -> u64 {
        self.total_auto_incr_trigger
    }

    /// Amount added to the total each time the trigger fires.
    pub fn total_auto_incr_by(&self) -> u64 {
        self.total_auto_incr_by
    }

    /// Whether the bar is removed from the display once complete.
    pub fn remove_on_complete(&self) -> bool {
        self.remove_on_complete
    }

    /// Glyph set the track is drawn with.
    pub fn glyphs(&self) -> &BarGlyphs {
        &self.glyphs
    }

    /// Left-side decorators, in render order.
    pub fn prepend_decorators(&self) -> &DecoratorList {
        &self.prepend_decorators
    }

    /// Right-side decorators, in render order.
    pub fn append_decorators(&self) -> &DecoratorList {
        &self.append_decorators
    }
}
