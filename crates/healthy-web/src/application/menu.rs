//! Menu toggling.
//!
//! The off-canvas menu is shown through its `show` class; every other menu
//! through its inline `display` style.  The page is the only place visibility
//! is recorded.

use healthy_core::domain::menu::DISPLAY_BLOCK;
use healthy_core::{next_display, strategy_for, ToggleStrategy};
use tracing::debug;

use super::page::{Page, PageError};

const DISPLAY: &str = "display";

/// Shows the menu with id `element_id` if hidden, hides it if shown, and
/// returns whether it is shown afterwards.
///
/// # Errors
///
/// [`PageError::ElementNotFound`] if there is no such element.  Nothing is
/// changed in that case.
pub fn toggle_menu<P: Page + ?Sized>(page: &mut P, element_id: &str) -> Result<bool, PageError> {
    let shown = match strategy_for(element_id) {
        ToggleStrategy::Class(class) => page.toggle_class(element_id, class)?,
        ToggleStrategy::InlineDisplay => {
            let current = page.inline_style(element_id, DISPLAY)?;
            let next = next_display(current.as_deref());
            page.set_inline_style(element_id, DISPLAY, next)?;
            next == DISPLAY_BLOCK
        }
    };

    debug!(element_id, shown, "menu toggled");
    Ok(shown)
}
