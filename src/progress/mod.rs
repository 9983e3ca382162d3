//! Progress module containing the glyph set and the indicatif-backed display.
//!
//! # Overview
//!
//! - `glyphs` - [`BarGlyphs`], the five characters a track is drawn with
//! - `display` - [`Progress`] container and [`Bar`] handle
//!
//! # Examples
//!
//! ## Custom glyphs for every bar of a container
//!
//! ```rust
//! use barstate::bar::BarOption;
//! use barstate::progress::{BarGlyphs, Progress};
//!
//! # fn main() -> barstate::Result<()> {
//! let mut progress = Progress::hidden().with_format(BarGlyphs::FORMAT_BLOCKS);
//! let bar = progress.add_bar(10, [BarOption::Trim])?;
//! assert_eq!(bar.state().glyphs().fill(), Some('█'));
//! # Ok(())
//! # }
//! ```
//!
//! ## An incomplete glyph set fails at first draw
//!
//! ```rust
//! use barstate::bar::BarOption;
//! use barstate::progress::Progress;
//! use barstate::Error;
//!
//! let mut progress = Progress::hidden();
//! let err = progress.add_bar(10, [BarOption::Format("[=]".into())]).unwrap_err();
//! assert!(matches!(err, Error::InvalidGlyphs { len: 3 }));
//! ```

pub(crate) mod display;
pub(crate) mod glyphs;

pub use display::{to_progress_style, Bar, Progress};
pub use glyphs::BarGlyphs;
