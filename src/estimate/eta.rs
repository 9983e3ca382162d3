//! Exponentially smoothed ETA estimation.
//!
//! Progress updates rarely arrive at a steady pace: a download may stall for a
//! second and then deliver a burst of chunks. The [`EtaAccumulator`] keeps an
//! exponential moving average of the work rate so that the projected time
//! remaining does not jump around with every irregular sample.
//!
//! ```text
//! instant  = work / elapsed
//! smoothed = instant                                  (first sample)
//! smoothed = alpha * instant + (1 - alpha) * smoothed (afterwards)
//! eta      = (total - current) / smoothed
//! ```

use indicatif::HumanDuration;
use std::fmt;
use std::time::Duration;
use tracing::trace;

/// Estimated time remaining for a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    /// A finite projection.
    Known(Duration),
    /// No rate has been observed yet, or the observed rate is zero.
    Unknown,
}

impl Eta {
    /// Return the projected duration, if any.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Eta::Known(d) => Some(*d),
            Eta::Unknown => None,
        }
    }

    /// Return `true` when a finite projection is available.
    pub fn is_known(&self) -> bool {
        matches!(self, Eta::Known(_))
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eta::Known(d) => write!(f, "{}", HumanDuration(*d)),
            Eta::Unknown => f.write_str("unknown"),
        }
    }
}

/// Running exponential moving average of the work rate, in units per second.
///
/// Owned by [`BarState`](crate::bar::BarState); the smoothing factor lives in
/// the bar configuration and is handed in with every sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EtaAccumulator {
    smoothed_rate: Option<f64>,
}

impl EtaAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The current smoothed rate, `None` until the first usable sample.
    pub fn smoothed_rate(&self) -> Option<f64> {
        self.smoothed_rate
    }

    /// Fold a `(elapsed, work)` sample into the average.
    ///
    /// Samples with a zero `elapsed` carry no rate information and are dropped.
    /// Returns `true` if the sample was used.
    pub(crate) fn sample(&mut self, alpha: f64, elapsed: Duration, work: u64) -> bool {
        if elapsed.is_zero() {
            trace!(work, "Ignoring ETA sample with zero elapsed time");
            return false;
        }

        let instant = work as f64 / elapsed.as_secs_f64();
        self.smoothed_rate = Some(match self.smoothed_rate {
            None => instant,
            Some(prev) => alpha * instant + (1.0 - alpha) * prev,
        });
        true
    }

    /// Project the time needed to get from `current` to `total`.
    pub fn estimate(&self, current: u64, total: u64) -> Eta {
        if current >= total {
            return Eta::Known(Duration::ZERO);
        }

        match self.smoothed_rate {
            Some(rate) if rate > 0.0 => {
                let remaining = (total - current) as f64;
                Duration::try_from_secs_f64(remaining / rate)
                    .map(Eta::Known)
                    .unwrap_or(Eta::Unknown)
            }
            _ => Eta::Unknown,
        }
    }
}
