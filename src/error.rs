//! Error handling for the barstate library.
//!
//! Applying bar options never fails. The variants below only surface when a
//! caller asks for validation explicitly ([`BarState::validate`],
//! [`BarBuilder::try_build`]) or when a bar is drawn for the first time and its
//! glyph set or template turns out to be unusable.
//!
//! [`BarState::validate`]: crate::bar::BarState::validate
//! [`BarBuilder::try_build`]: crate::bar::BarBuilder::try_build

use indicatif::style::TemplateError;
use thiserror::Error;

/// Errors that can happen when using barstate.
#[derive(Error, Debug)]
pub enum Error {
    /// The ETA smoothing factor is outside of `(0, 1]`.
    #[error("Invalid ETA alpha: {0} (expected 0 < alpha <= 1)")]
    InvalidEtaAlpha(f64),

    /// The auto-increment trigger is not a percentage.
    #[error("Invalid auto-increment trigger: {0}% (expected 0..=100)")]
    InvalidTrigger(u64),

    /// Auto-increment is armed but would add nothing to the total.
    #[error("Auto-increment amount must be greater than zero")]
    ZeroIncrement,

    /// A custom glyph set does not hold exactly five glyphs.
    ///
    /// The glyphs are, in order: left cap, fill, cursor, empty and right cap.
    #[error("Invalid glyph set: expected 5 glyphs, got {len}")]
    InvalidGlyphs { len: usize },

    /// The fill, cursor and empty glyphs do not share one display width.
    #[error("Invalid glyph set: fill, cursor and empty glyphs have widths {widths:?}")]
    MixedGlyphWidths { widths: [usize; 3] },

    /// Error from the indicatif template parser.
    #[error("Invalid progress template")]
    Template {
        #[from]
        source: TemplateError,
    },
}

/// Result type alias for operations that can fail with a barstate error.
pub type Result<T> = std::result::Result<T, Error>;
