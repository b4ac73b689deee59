//! Domain entities for the registration page.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies.  The application layer in `healthy-web` reads and writes the
//! page through a port trait and calls into these functions to decide what to
//! write.
//!
//! Code in outer layers depends on the domain, but the domain never depends on
//! them.

/// Slide index arithmetic and the horizontal offset of the slide strip.
pub mod carousel;

/// Exams recorded against a patient and the detail fields kept per kind.
pub mod exam;

/// Identifiers of the page elements the client reads and writes.
pub mod elements;

/// Show/hide strategy for the page menus.
pub mod menu;

/// The patient record submitted to the registration server.
pub mod patient;

/// Turning a server reply into the text shown to the user.
pub mod status;
