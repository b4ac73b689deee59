//! In-memory page.
//!
//! [`MemoryPage`] implements the [`Page`] port over a flat list of elements.
//! The command-line client fills one in from its flags and submits it, and the
//! tests use it to observe exactly what each use case wrote.
//!
//! Elements are matched in insertion order, so "the first element carrying a
//! class" is the first one inserted with it.

use std::collections::BTreeMap;

use healthy_core::domain::elements::{
    CAROUSEL_INNER_CLASS, CAROUSEL_ITEM_CLASS, OFFCANVAS_MENU, REGISTRATION_FORM,
    REGISTRATION_INPUTS, STATUS_MESSAGE,
};

use crate::application::page::{Page, PageError};

/// One element of a [`MemoryPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    id: Option<String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    /// `Some` for form inputs.
    value: Option<String>,
    /// Id of the form the input belongs to.
    form: Option<String>,
}

impl Element {
    /// An element with no id, class, style, or text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Makes the element an input belonging to `form_id`, holding `value`.
    pub fn input(mut self, form_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.form = Some(form_id.into());
        self.value = Some(value.into());
        self
    }

    /// Sets an inline style property.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Inline style property, if set.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

/// A [`Page`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Vec<Element>,
}

impl MemoryPage {
    /// An empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registration page: the form with its eight empty inputs, the status
    /// element, a carousel of `slides` slides, and the off-canvas menu.
    pub fn registration_page(slides: usize) -> Self {
        let mut page = Self::new();
        page.insert(Element::new().id(REGISTRATION_FORM));
        for input in REGISTRATION_INPUTS {
            page.insert(Element::new().id(input).input(REGISTRATION_FORM, ""));
        }
        page.insert(Element::new().id(STATUS_MESSAGE));
        page.insert(Element::new().class(CAROUSEL_INNER_CLASS));
        for _ in 0..slides {
            page.insert(Element::new().class(CAROUSEL_ITEM_CLASS));
        }
        page.insert(Element::new().id(OFFCANVAS_MENU));
        page
    }

    /// Appends an element.
    pub fn insert(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Removes every element carrying `class` and returns how many were removed.
    pub fn remove_by_class(&mut self, class: &str) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| !e.has_class(class));
        before - self.elements.len()
    }

    /// The element with id `id`.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    /// The first element carrying `class`.
    pub fn first_by_class(&self, class: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.has_class(class))
    }

    /// Text content of the element with id `id`.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] if there is no such element.
    pub fn text(&self, id: &str) -> Result<&str, PageError> {
        self.find(id).map(Element::text)
    }

    /// Types `value` into the input with id `id`.
    ///
    /// # Errors
    ///
    /// [`PageError::ElementNotFound`] or [`PageError::NotAnInput`].
    pub fn set_input(&mut self, id: &str, value: impl Into<String>) -> Result<(), PageError> {
        let element = self.find_mut(id)?;
        match element.value.as_mut() {
            Some(current) => {
                *current = value.into();
                Ok(())
            }
            None => Err(PageError::NotAnInput(id.to_string())),
        }
    }

    fn find(&self, id: &str) -> Result<&Element, PageError> {
        self.element(id)
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Element, PageError> {
        self.elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))
    }
}

impl Page for MemoryPage {
    fn count_by_class(&self, class: &str) -> usize {
        self.elements.iter().filter(|e| e.has_class(class)).count()
    }

    fn set_style_by_class(
        &mut self,
        class: &str,
        property: &str,
        value: &str,
    ) -> Result<(), PageError> {
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.has_class(class))
            .ok_or_else(|| PageError::ElementNotFound(format!(".{class}")))?;
        element.style.insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn input_value(&self, id: &str) -> Result<String, PageError> {
        self.find(id)?
            .value
            .clone()
            .ok_or_else(|| PageError::NotAnInput(id.to_string()))
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError> {
        self.find_mut(id)?.text = text.to_string();
        Ok(())
    }

    fn reset_form(&mut self, form_id: &str) -> Result<(), PageError> {
        self.find(form_id)?;
        for element in &mut self.elements {
            if element.form.as_deref() == Some(form_id) {
                if let Some(value) = element.value.as_mut() {
                    value.clear();
                }
            }
        }
        Ok(())
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, PageError> {
        let element = self.find_mut(id)?;
        if let Some(pos) = element.classes.iter().position(|c| c == class) {
            element.classes.remove(pos);
            Ok(false)
        } else {
            element.classes.push(class.to_string());
            Ok(true)
        }
    }

    fn inline_style(&self, id: &str, property: &str) -> Result<Option<String>, PageError> {
        Ok(self.find(id)?.style_value(property).map(str::to_string))
    }

    fn set_inline_style(
        &mut self,
        id: &str,
        property: &str,
        value: &str,
    ) -> Result<(), PageError> {
        self.find_mut(id)?
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_page_has_every_contract_element() {
        // Arrange / Act
        let page = MemoryPage::registration_page(3);

        // Assert
        assert!(page.element(REGISTRATION_FORM).is_some());
        assert!(page.element(STATUS_MESSAGE).is_some());
        assert!(page.element(OFFCANVAS_MENU).is_some());
        for input in REGISTRATION_INPUTS {
            assert_eq!(page.input_value(input), Ok(String::new()), "input {input}");
        }
        assert_eq!(page.count_by_class(CAROUSEL_ITEM_CLASS), 3);
        assert_eq!(page.count_by_class(CAROUSEL_INNER_CLASS), 1);
    }

    #[test]
    fn test_set_input_then_read_back() {
        let mut page = MemoryPage::registration_page(0);
        page.set_input("nomePaciente", "Maria").unwrap();
        assert_eq!(page.input_value("nomePaciente").unwrap(), "Maria");
    }

    #[test]
    fn test_input_value_of_missing_element_fails() {
        let page = MemoryPage::new();
        assert_eq!(
            page.input_value("nomePaciente"),
            Err(PageError::ElementNotFound("nomePaciente".to_string()))
        );
    }

    #[test]
    fn test_input_value_of_non_input_fails() {
        let page = MemoryPage::registration_page(0);
        assert_eq!(
            page.input_value(STATUS_MESSAGE),
            Err(PageError::NotAnInput(STATUS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_reset_form_clears_only_its_own_inputs() {
        // Arrange
        let mut page = MemoryPage::registration_page(0);
        page.insert(Element::new().id("busca").input("formBusca", "keep me"));
        page.set_input("cpfPaciente", "123").unwrap();

        // Act
        page.reset_form(REGISTRATION_FORM).unwrap();

        // Assert
        assert_eq!(page.input_value("cpfPaciente").unwrap(), "");
        assert_eq!(page.input_value("busca").unwrap(), "keep me");
    }

    #[test]
    fn test_reset_missing_form_fails() {
        let mut page = MemoryPage::new();
        assert!(page.reset_form(REGISTRATION_FORM).is_err());
    }

    #[test]
    fn test_toggle_class_adds_then_removes() {
        // Arrange
        let mut page = MemoryPage::registration_page(0);

        // Act / Assert
        assert_eq!(page.toggle_class(OFFCANVAS_MENU, "show"), Ok(true));
        assert!(page.element(OFFCANVAS_MENU).unwrap().has_class("show"));
        assert_eq!(page.toggle_class(OFFCANVAS_MENU, "show"), Ok(false));
        assert!(!page.element(OFFCANVAS_MENU).unwrap().has_class("show"));
    }

    #[test]
    fn test_set_style_by_class_targets_first_match() {
        // Arrange
        let mut page = MemoryPage::new();
        page.insert(Element::new().id("a").class("strip"));
        page.insert(Element::new().id("b").class("strip"));

        // Act
        page.set_style_by_class("strip", "transform", "translateX(-100%)")
            .unwrap();

        // Assert
        assert_eq!(
            page.element("a").unwrap().style_value("transform"),
            Some("translateX(-100%)")
        );
        assert_eq!(page.element("b").unwrap().style_value("transform"), None);
    }

    #[test]
    fn test_set_style_by_missing_class_fails() {
        let mut page = MemoryPage::new();
        assert_eq!(
            page.set_style_by_class("carousel-inner", "transform", "x"),
            Err(PageError::ElementNotFound(".carousel-inner".to_string()))
        );
    }

    #[test]
    fn test_remove_by_class_counts_removed_elements() {
        let mut page = MemoryPage::registration_page(4);
        assert_eq!(page.remove_by_class(CAROUSEL_ITEM_CLASS), 4);
        assert_eq!(page.count_by_class(CAROUSEL_ITEM_CLASS), 0);
    }

    #[test]
    fn test_inline_style_round_trip() {
        let mut page = MemoryPage::new();
        page.insert(Element::new().id("menu").style("display", "none"));
        assert_eq!(page.inline_style("menu", "display"), Ok(Some("none".to_string())));
        page.set_inline_style("menu", "display", "block").unwrap();
        assert_eq!(page.inline_style("menu", "display"), Ok(Some("block".to_string())));
    }
}
