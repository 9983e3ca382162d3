//! Barstate holds the configuration and running state of a single bar in a
//! multi-bar progress display: its options, a smoothed ETA and a total that
//! can grow while work is still being discovered.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use barstate::{decor, BarBuilder};
//!
//! let mut state = BarBuilder::new(100)
//!     .auto_incr_total(10, 20)
//!     .append_decorators(vec![decor::counters(), decor::eta()])
//!     .build();
//!
//! state.report(Duration::from_secs(1), 90);
//! assert_eq!(state.current_total(), 120);
//! println!("{}", state.append_decorators().render(&state.statistics()));
//! ```
//!
//! # Module Organization
//!
//! - [`bar`] - The [`BarState`] record, [`BarOption`] directives and the [`BarBuilder`]
//! - [`estimate`] - ETA smoothing and the dynamic total controller
//! - [`decor`] - Decorators and the ordered lists holding them
//! - [`progress`] - Glyph sets and the indicatif-backed [`Progress`] container
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod bar;
pub mod decor;
pub mod error;
pub mod estimate;
pub mod progress;

pub use bar::{apply_options, BarBuilder, BarOption, BarState};
pub use decor::{DecoratorFunc, DecoratorList, Statistics};
pub use error::{Error, Result};
pub use estimate::{AutoIncrement, DynamicTotal, Eta, EtaAccumulator};
pub use progress::{Bar, BarGlyphs, Progress};
