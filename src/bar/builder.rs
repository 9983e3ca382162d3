//! Builder front end for bar options.
//!
//! [`BarBuilder`] records one [`BarOption`] per setter call, in call order, and
//! hands the list to [`apply_options`] on [`build`](BarBuilder::build).
//!
//! # Examples
//!
//! ```rust
//! use barstate::bar::BarBuilder;
//! use barstate::decor;
//!
//! let state = BarBuilder::new(1024)
//!     .id(7)
//!     .eta_alpha(0.5)
//!     .auto_incr_total(10, 256)
//!     .append_decorators(vec![decor::counters()])
//!     .build();
//!
//! assert_eq!(state.id(), 7);
//! assert!(state.dynamic());
//! ```

use super::option::{apply_options, BarOption};
use super::state::BarState;
use crate::decor::DecoratorFunc;
use crate::error::Result;

/// A builder used to create a [`BarState`].
#[derive(Debug, Clone, Default)]
pub struct BarBuilder {
    total: u64,
    options: Vec<BarOption>,
}

impl BarBuilder {
    /// Creates a builder for a bar with the given total.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            options: Vec::new(),
        }
    }

    fn push(mut self, option: BarOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add decorators to the right side of the bar.
    pub fn append_decorators(self, decorators: Vec<DecoratorFunc>) -> Self {
        self.push(BarOption::AppendDecorators(decorators))
    }

    /// Add decorators to the left side of the bar.
    pub fn prepend_decorators(self, decorators: Vec<DecoratorFunc>) -> Self {
        self.push(BarOption::PrependDecorators(decorators))
    }

    pub fn trim_left(self) -> Self {
        self.push(BarOption::TrimLeft)
    }

    pub fn trim_right(self) -> Self {
        self.push(BarOption::TrimRight)
    }

    pub fn trim(self) -> Self {
        self.push(BarOption::Trim)
    }

    /// Override the bar id.
    pub fn id(self, id: usize) -> Self {
        self.push(BarOption::Id(id))
    }

    /// Set the ETA smoothing factor.
    pub fn eta_alpha(self, alpha: f64) -> Self {
        self.push(BarOption::EtaAlpha(alpha))
    }

    /// Allow the total to change while the bar runs.
    pub fn dynamic_total(self) -> Self {
        self.push(BarOption::DynamicTotal)
    }

    /// Grow the total by `amount` once `trigger` percent or less remains.
    pub fn auto_incr_total(self, trigger: u64, amount: u64) -> Self {
        self.push(BarOption::AutoIncrTotal { trigger, amount })
    }

    /// Remove the bar from the display once it completes.
    pub fn remove_on_complete(self) -> Self {
        self.push(BarOption::RemoveOnComplete)
    }

    /// The recorded options, in call order.
    pub fn options(&self) -> &[BarOption] {
        &self.options
    }

    /// Consume the builder and return the recorded options.
    pub fn into_options(self) -> Vec<BarOption> {
        self.options
    }

    /// Create the [`BarState`] without validating it.
    pub fn build(self) -> BarState {
        apply_options(BarState::new(self.total), self.options)
    }

    /// Create the [`BarState`] and reject out-of-range configuration.
    pub fn try_build(self) -> Result<BarState> {
        let state = self.build();
        state.validate()?;
        Ok(state)
    }
}
