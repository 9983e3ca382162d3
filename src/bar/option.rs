//! Bar options and the applier that folds them into a [`BarState`].
//!
//! Options are plain values: each variant carries only its parameters and is
//! interpreted by [`apply_options`]. Scalar options follow last-write-wins;
//! decorator options append, so several of them accumulate in call order.
//!
//! No option can fail. Out-of-range values such as an alpha of `0.0` or a
//! trigger of `150` are stored as given; see [`BarState::validate`].
//!
//! # Examples
//!
//! ```rust
//! use barstate::bar::{apply_options, BarOption, BarState};
//!
//! let state = apply_options(BarState::new(100), [
//!     BarOption::EtaAlpha(0.1),
//!     BarOption::Trim,
//!     BarOption::EtaAlpha(0.5),
//! ]);
//!
//! assert_eq!(state.eta_alpha(), 0.5);
//! assert!(state.trim_left_space() && state.trim_right_space());
//! ```

use super::state::BarState;
use crate::decor::DecoratorFunc;
use crate::progress::BarGlyphs;

use std::fmt;
use tracing::{debug, trace};

/// A directive changing the default behavior of a bar.
#[derive(Clone)]
pub enum BarOption {
    /// Add decorators to the right side of the bar.
    AppendDecorators(Vec<DecoratorFunc>),
    /// Add decorators to the left side of the bar.
    PrependDecorators(Vec<DecoratorFunc>),
    /// Drop the space between the left decorators and the track.
    TrimLeft,
    /// Drop the space between the track and the right decorators.
    TrimRight,
    /// Drop the spaces on both sides of the track.
    Trim,
    /// Override the bar id.
    Id(usize),
    /// Override the ETA smoothing factor. Default is `0.25`.
    ///
    /// Values closer to `1.0` follow rate changes faster but jitter more.
    EtaAlpha(f64),
    /// Allow the total to change while the bar runs.
    DynamicTotal,
    /// Grow the total by `amount` whenever no more than `trigger` percent of it
    /// remains. Implies [`BarOption::DynamicTotal`].
    ///
    /// With `trigger = 10`, growth starts once the bar reaches 90%.
    AutoIncrTotal { trigger: u64, amount: u64 },
    /// Remove the bar from the display once it completes.
    RemoveOnComplete,
    /// Track width in columns. Set by the container.
    Width(usize),
    /// Five-glyph format string. Set by the container.
    Format(String),
}

impl fmt::Debug for BarOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppendDecorators(d) => f.debug_tuple("AppendDecorators").field(&d.len()).finish(),
            Self::PrependDecorators(d) => f.debug_tuple("PrependDecorators").field(&d.len()).finish(),
            Self::TrimLeft => f.write_str("TrimLeft"),
            Self::TrimRight => f.write_str("TrimRight"),
            Self::Trim => f.write_str("Trim"),
            Self::Id(id) => f.debug_tuple("Id").field(id).finish(),
            Self::EtaAlpha(a) => f.debug_tuple("EtaAlpha").field(a).finish(),
            Self::DynamicTotal => f.write_str("DynamicTotal"),
            Self::AutoIncrTotal { trigger, amount } => f
                .debug_struct("AutoIncrTotal")
                .field("trigger", trigger)
                .field("amount", amount)
                .finish(),
            Self::RemoveOnComplete => f.write_str("RemoveOnComplete"),
            Self::Width(w) => f.debug_tuple("Width").field(w).finish(),
            Self::Format(s) => f.debug_tuple("Format").field(s).finish(),
        }
    }
}

impl BarOption {
    /// Apply this option to `state`.
    pub fn apply(self, state: &mut BarState) {
        trace!(option = ?self, "Applying bar option");
        match self {
            Self::AppendDecorators(decorators) => state.append_decorators.extend(decorators),
            Self::PrependDecorators(decorators) => state.prepend_decorators.extend(decorators),
            Self::TrimLeft => state.trim_left_space = true,
            Self::TrimRight => state.trim_right_space = true,
            Self::Trim => {
                state.trim_left_space = true;
                state.trim_right_space = true;
            }
            Self::Id(id) => state.id = id,
            Self::EtaAlpha(alpha) => state.eta_alpha = alpha,
            Self::DynamicTotal => state.dynamic = true,
            Self::AutoIncrTotal { trigger, amount } => {
                state.dynamic = true;
                state.total_auto_incr_trigger = trigger;
                state.total_auto_incr_by = amount;
            }
            Self::RemoveOnComplete => state.remove_on_complete = true,
            Self::Width(width) => state.width = width,
            Self::Format(format) => state.glyphs = BarGlyphs::from_format(&format),
        }
    }
}

/// Apply `options` to `state` in order and return the finished record.
pub fn apply_options<I>(mut state: BarState, options: I) -> BarState
where
    I: IntoIterator<Item = BarOption>,
{
    let mut applied = 0usize;
    for option in options {
        option.apply(&mut state);
        applied += 1;
    }
    debug!(id = state.id, applied, "Applied bar options");
    state
}
