//! CarouselController: moves the slide strip in response to the arrow buttons.
//!
//! The slide count is read from the page on every move rather than cached, so
//! slides added or removed between clicks are taken into account.

use healthy_core::domain::elements::{CAROUSEL_INNER_CLASS, CAROUSEL_ITEM_CLASS};
use healthy_core::Carousel;
use tracing::debug;

use super::page::{Page, PageError};

/// CSS property the strip offset is written to.
const TRANSFORM: &str = "transform";

/// Owns the state of one carousel and applies its moves to a page.
#[derive(Debug, Clone, Default)]
pub struct CarouselController {
    carousel: Carousel,
}

impl CarouselController {
    /// A controller showing the first slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the slide currently shown.
    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    /// Moves `direction` slides (by convention `1` or `-1`), shifts the strip,
    /// and returns the new index.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if the page has no `carousel-inner`
    /// element.  The index has already moved when this happens.
    pub fn advance<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        direction: isize,
    ) -> Result<usize, PageError> {
        let count = page.count_by_class(CAROUSEL_ITEM_CLASS);
        let index = self.carousel.advance(direction, count);
        let transform = self.carousel.transform();

        debug!(direction, count, index, %transform, "carousel moved");

        page.set_style_by_class(CAROUSEL_INNER_CLASS, TRANSFORM, &transform)?;
        Ok(index)
    }
}
