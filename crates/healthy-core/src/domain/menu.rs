//! Show/hide strategy for the page menus.
//!
//! Two strategies exist, chosen by the element's id alone:
//!
//! - The off-canvas menu (`offcanvasMenu`) is toggled by adding or removing the
//!   `show` class.
//! - Every other menu is toggled through its inline `display` style.  Only an
//!   exact `block` counts as open; anything else, including no inline style at
//!   all, counts as closed.

use super::elements::{OFFCANVAS_MENU, SHOW_CLASS};

/// Inline display value of an open menu.
pub const DISPLAY_BLOCK: &str = "block";

/// Inline display value of a closed menu.
pub const DISPLAY_NONE: &str = "none";

/// How a menu element is shown and hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStrategy {
    /// Toggle membership of the given class.
    Class(&'static str),
    /// Flip the inline `display` style between `block` and `none`.
    InlineDisplay,
}

/// Picks the strategy for the menu with id `element_id`.
///
/// ```rust
/// use healthy_core::{strategy_for, ToggleStrategy};
///
/// assert_eq!(strategy_for("offcanvasMenu"), ToggleStrategy::Class("show"));
/// assert_eq!(strategy_for("userMenu"), ToggleStrategy::InlineDisplay);
/// ```
pub fn strategy_for(element_id: &str) -> ToggleStrategy {
    if element_id == OFFCANVAS_MENU {
        ToggleStrategy::Class(SHOW_CLASS)
    } else {
        ToggleStrategy::InlineDisplay
    }
}

/// Returns the inline display value that follows `current`.
pub fn next_display(current: Option<&str>) -> &'static str {
    match current {
        Some(DISPLAY_BLOCK) => DISPLAY_NONE,
        _ => DISPLAY_BLOCK,
    }
}
