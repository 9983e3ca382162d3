//! The glyph set a bar track is drawn with.
//!
//! A glyph set holds five characters, in order: left cap, fill, cursor, empty
//! and right cap. The default is `[=>-]`, which draws as `[=====>----]`.
//!
//! Custom sets are stored verbatim. They are only checked when the bar is
//! drawn, or when [`BarGlyphs::validate`] is called: the set must hold five
//! glyphs, and the fill, cursor and empty glyphs must share one display width.

use crate::error::{Error, Result};
use console::measure_text_width;
use std::fmt;

/// Ordered glyph set: left cap, fill, cursor, empty, right cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarGlyphs {
    glyphs: Vec<char>,
}

impl Default for BarGlyphs {
    fn default() -> Self {
        Self::from_format(Self::DEFAULT_FORMAT)
    }
}

impl fmt::Display for BarGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl BarGlyphs {
    /// Number of glyphs in a complete set.
    pub const LEN: usize = 5;
    /// `[=====>----]`
    pub const DEFAULT_FORMAT: &'static str = "[=>-]";
    /// `│█████▌    │`
    pub const FORMAT_BLOCKS: &'static str = "│█▌ │";
    /// `━━━━━╸─────`, without caps.
    pub const FORMAT_LINE: &'static str = " ━╸─ ";

    /// Split a format string into glyphs, one per `char`.
    pub fn from_format(format: &str) -> Self {
        Self {
            glyphs: format.chars().collect(),
        }
    }

    /// Number of glyphs held.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Return `true` if no glyph is held.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Check that the set holds exactly five glyphs and that the track glyphs
    /// can be drawn side by side.
    pub fn validate(&self) -> Result<()> {
        if self.glyphs.len() != Self::LEN {
            return Err(Error::InvalidGlyphs {
                len: self.glyphs.len(),
            });
        }

        let widths = [1, 2, 3].map(|i| measure_text_width(&self.glyphs[i].to_string()));
        if widths.iter().any(|w| *w != widths[0]) {
            return Err(Error::MixedGlyphWidths { widths });
        }
        Ok(())
    }

    /// First glyph, drawn before the track.
    pub fn left_cap(&self) -> Option<char> {
        self.glyphs.first().copied()
    }

    /// Glyph for the completed part of the track.
    pub fn fill(&self) -> Option<char> {
        self.glyphs.get(1).copied()
    }

    /// Glyph at the head of the completed part.
    pub fn cursor(&self) -> Option<char> {
        self.glyphs.get(2).copied()
    }

    /// Glyph for the remaining part of the track.
    pub fn empty(&self) -> Option<char> {
        self.glyphs.get(3).copied()
    }

    /// Last glyph, drawn after the track.
    pub fn right_cap(&self) -> Option<char> {
        self.glyphs.get(4).copied()
    }

    /// The left and right caps.
    pub fn caps(&self) -> Result<(char, char)> {
        self.validate()?;
        Ok((self.glyphs[0], self.glyphs[4]))
    }

    /// The `fill`, `cursor` and `empty` glyphs as an indicatif progress chars string.
    pub fn progress_chars(&self) -> Result<String> {
        self.validate()?;
        Ok(self.glyphs[1..4].iter().collect())
    }
}
