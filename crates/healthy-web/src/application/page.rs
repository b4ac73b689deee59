//! The page port: everything the use cases read from or write to the document.
//!
//! The use cases never hold a document directly.  They receive something that
//! implements [`Page`], which keeps them testable without a browser and lets the
//! command-line client drive them against an in-memory page.
//!
//! Lookups by id fail with [`PageError::ElementNotFound`] before anything is
//! written, so a missing element never leaves the page half-updated by the
//! failing call.

use thiserror::Error;

/// Errors raised by a [`Page`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// No element matches the id or class.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// The element exists but holds no value (it is not a form input).
    #[error("element is not an input: {0}")]
    NotAnInput(String),
}

/// Read/write access to the elements of one page.
pub trait Page {
    /// Number of elements carrying `class`.
    fn count_by_class(&self, class: &str) -> usize;

    /// Sets inline style `property` on the first element carrying `class`.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if no element carries `class`.
    fn set_style_by_class(&mut self, class: &str, property: &str, value: &str)
        -> Result<(), PageError>;

    /// Current value of the input with id `id`.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] or [`PageError::NotAnInput`].
    fn input_value(&self, id: &str) -> Result<String, PageError>;

    /// Replaces the text content of the element with id `id`.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if there is no such element.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError>;

    /// Clears every input belonging to the form with id `form_id`.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if there is no such form.
    fn reset_form(&mut self, form_id: &str) -> Result<(), PageError>;

    /// Adds `class` to the element if absent, removes it if present, and
    /// returns whether the element carries it afterwards.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if there is no such element.
    fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, PageError>;

    /// Inline style `property` of the element, or `None` if it has none set.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if there is no such element.
    fn inline_style(&self, id: &str, property: &str) -> Result<Option<String>, PageError>;

    /// Sets inline style `property` of the element.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if there is no such element.
    fn set_inline_style(&mut self, id: &str, property: &str, value: &str)
        -> Result<(), PageError>;
}

/// A form submission as delivered to the submit handler.
///
/// The handler calls [`prevent_default`](Self::prevent_default) to stop the
/// page from performing its own navigation-based submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// A fresh, uncancelled submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the default submit action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was cancelled.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
