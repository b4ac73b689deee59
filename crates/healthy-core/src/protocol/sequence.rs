//! Sequence numbers for registration requests.
//!
//! Nothing stops a user from pressing "submit" twice before the first reply
//! arrives.  Each submission therefore takes a number from a
//! [`RequestSequence`], and a reply is only applied to the page if its number
//! is still the latest one issued.  A slow first reply that lands after a
//! faster second one is discarded instead of overwriting the newer outcome.
//!
//! ```text
//! issue() → 1 ──────────────── reply ─→ is_current(1)? no, dropped
//! issue() → 2 ──── reply ─→ is_current(2)? yes, applied
//! ```
//!
//! # Thread safety
//!
//! The counter is an `AtomicU64`, so one sequence can be shared between the
//! task that starts submissions and the tasks that complete them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues increasing request numbers and remembers the latest one.
///
/// Numbers start at 1; 0 means no request has been issued yet.
///
/// # Examples
///
/// ```rust
/// use healthy_core::RequestSequence;
///
/// let sequence = RequestSequence::new();
/// let first = sequence.issue();
/// let second = sequence.issue();
/// assert!(!sequence.is_current(first));
/// assert!(sequence.is_current(second));
/// ```
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    /// Creates a sequence with no request issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next request number.
    ///
    /// Wraps from `u64::MAX` to 0 without panicking.
    pub fn issue(&self) -> u64 {
        // `Relaxed` is enough: the number orders replies, it does not publish
        // any other memory.
        self.latest.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// The most recently issued number, or 0 if none was issued.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Relaxed)
    }

    /// Whether `number` is still the latest issued request.
    pub fn is_current(&self, number: u64) -> bool {
        self.latest() == number
    }
}
