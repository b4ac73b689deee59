//! Carousel domain entity.
//!
//! The carousel shows one slide at a time out of an ordered strip of slides.
//! Moving left or right changes a single index; the strip is then shifted
//! horizontally by `-index * 100` percent so exactly one slide is visible.
//!
//! # Wrap-around policy
//!
//! Stepping past either end snaps to the opposite end:
//!
//! ```text
//! count = 3
//!   index 0, step -1  →  2
//!   index 2, step +1  →  0
//! ```
//!
//! This is a clamp-and-wrap, not a modulo.  A step whose magnitude exceeds the
//! slide count snaps to an end instead of wrapping the remainder
//! (`index 0, step +5, count 3` gives `0`, not `2`).  Callers step by one.

/// Computes the index after moving `direction` slides from `current`.
///
/// - A result below zero becomes `count - 1`.
/// - A result at or beyond `count` becomes `0`.
/// - Anything else is returned unchanged.
///
/// With `count == 0` there is no valid slide; the function returns `0`.
///
/// # Examples
///
/// ```rust
/// use healthy_core::compute_next_index;
///
/// assert_eq!(compute_next_index(0, -1, 3), 2);
/// assert_eq!(compute_next_index(2, 1, 3), 0);
/// assert_eq!(compute_next_index(1, 1, 3), 2);
/// ```
pub fn compute_next_index(current: usize, direction: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    // i128 holds any usize + isize without overflow.
    let candidate = current as i128 + direction as i128;

    if candidate < 0 {
        count - 1
    } else if candidate >= count as i128 {
        0
    } else {
        candidate as usize
    }
}

/// Formats the CSS transform that shifts the slide strip by `offset_percent`.
///
/// ```rust
/// use healthy_core::translate_x;
///
/// assert_eq!(translate_x(-200), "translateX(-200%)");
/// ```
pub fn translate_x(offset_percent: i64) -> String {
    format!("translateX({offset_percent}%)")
}

/// State of one carousel on the page.
///
/// Each carousel owns its own index, so several carousels can live on the same
/// page without sharing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    /// Creates a carousel showing the first slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the slide currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves by `direction` slides within a strip of `count` slides and
    /// returns the new index.
    ///
    /// `count` is supplied on every call because the slide set may change
    /// between calls.
    pub fn advance(&mut self, direction: isize, count: usize) -> usize {
        self.index = compute_next_index(self.index, direction, count);
        self.index
    }

    /// Horizontal offset of the slide strip, in percent of one slide width.
    pub fn offset_percent(&self) -> i64 {
        -(self.index as i64) * 100
    }

    /// The CSS transform for the current index.
    pub fn transform(&self) -> String {
        translate_x(self.offset_percent())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
