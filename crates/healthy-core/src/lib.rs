//! # healthy-core
//!
//! Shared library for the Healthy patient-registration client containing the
//! pure page logic and the JSON wire format spoken with the registration
//! server.
//!
//! It has zero dependencies on HTTP clients, async runtimes, or a browser
//! document.  Everything here can be unit-tested without a page.
//!
//! # Architecture overview
//!
//! The registration page has three independent behaviours: a slide carousel,
//! an asynchronously submitted registration form, and a pair of menus that are
//! shown and hidden on click.  This crate holds the decisions behind them:
//!
//! - **`domain`** – Carousel index arithmetic, the patient record, exams and
//!   their per-kind details, status-text selection for a server reply, menu
//!   toggle strategy, and the identifiers of the page elements the client
//!   relies on.
//!
//! - **`protocol`** – How reply bodies become typed values such as
//!   [`RegistrationResponse`] or an exam history, plus the sequence numbers
//!   used to discard out-of-order replies.

pub mod domain;
pub mod protocol;

pub use domain::carousel::{compute_next_index, translate_x, Carousel};
pub use domain::exam::{shape_details, ExamDetails, ExamEntry, ExamKind, ExamRequest};
pub use domain::menu::{next_display, strategy_for, ToggleStrategy};
pub use domain::patient::{patient_document_id, Address, PatientRecord, PatientSummary};
pub use domain::status::{select_status_text, should_reset_form, RegistrationResponse};
pub use protocol::sequence::RequestSequence;
pub use protocol::wire::{decode_registration_response, WireError};
