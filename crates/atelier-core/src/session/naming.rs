//! Project name generation.
//!
//! Both name shapes are user-visible and load-bearing for tests elsewhere
//! in the product, so the clock and the random source are injectable.

use chrono::{DateTime, Local};
use rand::Rng;

/// Upper bound (exclusive) for the fresh-project name suffix.
pub(crate) const FRESH_NAME_SUFFIX_BOUND: u32 = 100_000;

/// Wall-clock source for time-based project names.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// System local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Bounded uniform integer source for fresh-project name suffixes.
pub trait NameEntropy: Send + Sync {
    /// A uniform draw from `[0, bound)`.
    fn pick(&self, bound: u32) -> u32;
}

/// Thread-local RNG backed entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandEntropy;

impl NameEntropy for RandEntropy {
    fn pick(&self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}

/// Name for a project materialized from anonymous work, stamped with the
/// local time the work was rescued. Hour is 1-2 digits.
pub(crate) fn rescued_work_name(now: DateTime<Local>) -> String {
    format!("Design from {}", now.format("%-H:%M:%S"))
}

/// Name for a brand-new empty project.
pub(crate) fn fresh_project_name(entropy: &dyn NameEntropy) -> String {
    format!("New Design #{}", entropy.pick(FRESH_NAME_SUFFIX_BOUND))
}
