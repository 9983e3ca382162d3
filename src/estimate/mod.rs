//! Running estimates attached to a bar.
//!
//! - `eta` - exponential moving average of the work rate and the [`Eta`] it projects
//! - `total` - the dynamic total controller that grows a bar's total before completion
//!
//! Both are embedded in [`BarState`](crate::bar::BarState) and are only driven
//! through [`BarState::report`](crate::bar::BarState::report).

pub(crate) mod eta;
pub(crate) mod total;

pub use eta::{Eta, EtaAccumulator};
pub use total::{AutoIncrement, DynamicTotal};
