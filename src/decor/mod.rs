//! Decorators and the ordered lists that hold them.
//!
//! A decorator is a render-time hook that turns a [`Statistics`] snapshot into
//! a text fragment placed on the left (prepend) or right (append) side of a
//! bar's track. A bar owns one [`DecoratorList`] per side; lists only grow, and
//! their insertion order is the render order.
//!
//! # Examples
//!
//! ```rust
//! use barstate::bar::BarBuilder;
//! use barstate::decor;
//!
//! let state = BarBuilder::new(100)
//!     .prepend_decorators(vec![decor::name("fetch")])
//!     .append_decorators(vec![decor::percentage(), decor::eta()])
//!     .build();
//!
//! let stats = state.statistics();
//! assert_eq!(state.prepend_decorators().render(&stats), "fetch");
//! assert_eq!(state.append_decorators().render(&stats), "0% unknown");
//! ```

use crate::estimate::Eta;
use indicatif::HumanDuration;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A decorator: produces one text fragment from a bar snapshot.
pub type DecoratorFunc = Arc<dyn Fn(&Statistics) -> String + Send + Sync>;

/// Wrap a closure into a [`DecoratorFunc`].
pub fn decorator<F>(f: F) -> DecoratorFunc
where
    F: Fn(&Statistics) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Snapshot of a bar handed to decorators.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Bar id.
    pub id: usize,
    /// Whether the bar has completed.
    pub completed: bool,
    /// Current total.
    pub total: u64,
    /// Current position.
    pub current: u64,
    /// Sum of the elapsed time of all reports.
    pub elapsed: Duration,
    /// Smoothed time remaining.
    pub eta: Eta,
}

impl Statistics {
    /// Completion percentage in `0..=100`.
    pub fn percentage(&self) -> u64 {
        if self.total == 0 {
            return if self.completed { 100 } else { 0 };
        }
        let pct = u128::from(self.current.min(self.total)) * 100 / u128::from(self.total);
        pct as u64
    }
}

/// Ordered, append-only list of decorators.
#[derive(Clone, Default)]
pub struct DecoratorList {
    decorators: Vec<DecoratorFunc>,
}

impl fmt::Debug for DecoratorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratorList")
            .field("len", &self.decorators.len())
            .finish()
    }
}

impl DecoratorList {
    /// Append decorators after the existing ones.
    pub(crate) fn extend<I>(&mut self, decorators: I)
    where
        I: IntoIterator<Item = DecoratorFunc>,
    {
        self.decorators.extend(decorators);
    }

    /// Number of decorators in the list.
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Return `true` if the list holds no decorator.
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Iterate the decorators in render order.
    pub fn iter(&self) -> impl Iterator<Item = &DecoratorFunc> {
        self.decorators.iter()
    }

    /// Invoke every decorator in order and join the fragments with a space.
    pub fn render(&self, stats: &Statistics) -> String {
        self.decorators
            .iter()
            .map(|d| d(stats))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A fixed label.
pub fn name(name: impl Into<String>) -> DecoratorFunc {
    let name = name.into();
    decorator(move |_| name.clone())
}

/// `current / total`.
pub fn counters() -> DecoratorFunc {
    decorator(|s| format!("{} / {}", s.current, s.total))
}

/// Completion percentage, e.g. `42%`.
pub fn percentage() -> DecoratorFunc {
    decorator(|s| format!("{}%", s.percentage()))
}

/// Smoothed time remaining, or `unknown`.
pub fn eta() -> DecoratorFunc {
    decorator(|s| s.eta.to_string())
}

/// Time elapsed since the first report.
pub fn elapsed() -> DecoratorFunc {
    decorator(|s| HumanDuration(s.elapsed).to_string())
}
