//! Multi-bar container and the per-bar handle that draws through indicatif.
//!
//! [`Progress`] owns an indicatif [`MultiProgress`], assigns bar ids and injects
//! container-wide defaults (track width, glyph format) ahead of each bar's own
//! options. [`Bar`] pairs a [`BarState`] with the [`ProgressBar`] that shows it
//! and keeps the two in sync on every update.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use barstate::bar::BarOption;
//! use barstate::decor;
//! use barstate::progress::Progress;
//!
//! # fn main() -> barstate::Result<()> {
//! let mut progress = Progress::hidden().with_width(40);
//! let mut bar = progress.add_bar(100, [
//!     BarOption::PrependDecorators(vec![decor::name("task")]),
//!     BarOption::AppendDecorators(vec![decor::percentage()]),
//! ])?;
//!
//! bar.report(Duration::from_millis(250), 25);
//! assert_eq!(bar.progress_bar().position(), 25);
//! bar.finish();
//! # Ok(())
//! # }
//! ```

use crate::bar::{BarOption, BarState};
use crate::error::Result;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Container coordinating several bars on one draw target.
pub struct Progress {
    multi: Arc<MultiProgress>,
    width: usize,
    format: Option<String>,
    next_id: usize,
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progress")
            .field("width", &self.width)
            .field("format", &self.format)
            .field("bar_count", &self.next_id)
            .finish()
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Default track width handed to every bar.
    pub const DEFAULT_WIDTH: usize = 80;

    /// Create a container drawing to stderr.
    pub fn new() -> Self {
        Self::with_multi(MultiProgress::new())
    }

    /// Create a container that never draws.
    pub fn hidden() -> Self {
        Self::with_multi(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    fn with_multi(multi: MultiProgress) -> Self {
        Self {
            multi: Arc::new(multi),
            width: Self::DEFAULT_WIDTH,
            format: None,
            next_id: 0,
        }
    }

    /// Set the track width of bars added from now on. `0` fills the terminal.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the glyph format of bars added from now on, e.g. `"[=>-]"`.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Get the multi-progress instance.
    pub fn multi(&self) -> Arc<MultiProgress> {
        self.multi.clone()
    }

    /// Number of bars added so far.
    pub fn bar_count(&self) -> usize {
        self.next_id
    }

    /// Add a bar with the given total.
    ///
    /// The bar receives the next sequential id, the container width and format,
    /// then `options` in order, so an explicit [`BarOption::Id`],
    /// [`BarOption::Width`] or [`BarOption::Format`] wins. Fails if the
    /// resulting glyph set cannot be drawn.
    pub fn add_bar<I>(&mut self, total: u64, options: I) -> Result<Bar>
    where
        I: IntoIterator<Item = BarOption>,
    {
        let defaults = [BarOption::Id(self.next_id), BarOption::Width(self.width)]
            .into_iter()
            .chain(self.format.clone().map(BarOption::Format));
        let state = BarState::with_options(total, defaults.chain(options));
        let style = to_progress_style(&state)?;

        let pb = self.multi.add(ProgressBar::new(total).with_style(style));
        self.next_id += 1;
        debug!(id = state.id(), total, "Added bar");

        let bar = Bar { state, pb };
        bar.sync();
        Ok(bar)
    }
}

/// Create the indicatif [`ProgressStyle`] for a bar's layout.
///
/// Decorators are drawn through the prefix (left) and message (right); the
/// caps come from the glyph set, as do the fill, cursor and empty characters.
pub fn to_progress_style(state: &BarState) -> Result<ProgressStyle> {
    let glyphs = state.glyphs();
    let progress_chars = glyphs.progress_chars()?;
    let (left_cap, right_cap) = glyphs.caps()?;
    let (left_cap, right_cap) = (escape(left_cap), escape(right_cap));

    let track = match state.width() {
        0 => "{wide_bar}".to_string(),
        w => format!("{{bar:{w}}}"),
    };
    let left = if state.trim_left_space() { "" } else { " " };
    let right = if state.trim_right_space() { "" } else { " " };
    let template = format!("{{prefix}}{left}{left_cap}{track}{right_cap}{right}{{msg}}");

    Ok(ProgressStyle::default_bar()
        .template(&template)?
        .progress_chars(&progress_chars))
}

fn escape(c: char) -> String {
    match c {
        '{' => "{{".into(),
        '}' => "}}".into(),
        c => c.to_string(),
    }
}

/// A bar registered with a [`Progress`] container.
pub struct Bar {
    state: BarState,
    pb: ProgressBar,
}

impl fmt::Debug for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bar").field("state", &self.state).finish()
    }
}

impl Bar {
    /// The bar configuration and running state.
    pub fn state(&self) -> &BarState {
        &self.state
    }

    /// The underlying indicatif bar.
    pub fn progress_bar(&self) -> &ProgressBar {
        &self.pb
    }

    /// Feed one progress update and redraw.
    pub fn report(&mut self, elapsed: Duration, work: u64) {
        self.state.report(elapsed, work);
        self.sync();
    }

    /// Replace the total, see [`BarState::set_total`].
    pub fn set_total(&mut self, total: u64, finalize: bool) {
        self.state.set_total(total, finalize);
        self.sync();
    }

    /// Mark the bar complete and redraw.
    pub fn complete(&mut self) {
        self.state.complete();
        self.sync();
    }

    /// Finish the bar, clearing it if it was configured to be removed on completion.
    pub fn finish(self) -> BarState {
        if self.state.remove_on_complete() {
            self.pb.finish_and_clear();
        } else {
            self.pb.finish();
        }
        debug!(id = self.state.id(), "Finished bar");
        self.state
    }

    fn sync(&self) {
        let stats = self.state.statistics();
        self.pb.set_length(stats.total);
        self.pb.set_position(stats.current);
        self.pb.set_prefix(self.state.prepend_decorators().render(&stats));
        self.pb.set_message(self.state.append_decorators().render(&stats));
    }
}
