//! Bar module containing the per-bar configuration record, its options and builder.
//!
//! # Overview
//!
//! - `state` - [`BarState`], the configuration record plus its running ETA and total
//! - `option` - [`BarOption`] directives and [`apply_options`]
//! - `builder` - [`BarBuilder`] for chained construction
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use barstate::bar::BarBuilder;
//!
//! let mut state = BarBuilder::new(100).eta_alpha(0.25).build();
//! for _ in 0..4 {
//!     state.report(Duration::from_secs(1), 10);
//! }
//! assert_eq!(state.current_eta().as_duration(), Some(Duration::from_secs(6)));
//! ```

pub(crate) mod builder;
pub(crate) mod option;
pub(crate) mod state;

pub use builder::BarBuilder;
pub use option::{apply_options, BarOption};
pub use state::BarState;
