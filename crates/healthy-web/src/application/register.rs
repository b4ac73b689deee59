//! RegistrationSubmitter: handles a submit of the registration form.
//!
//! # Flow
//!
//! ```text
//! submit event
//!   │  prevent_default()                       (always, first)
//!   │  read the eight inputs → PatientRecord    (no validation)
//!   │  issue a sequence number
//!   ▼
//! PatientApi::register(record)  ── POST /cadastrar-paciente
//!   │
//!   ├─ Ok(reply)  → status = message, else error, else ""
//!   │               reset the form if message is non-empty
//!   └─ Err(e)     → status = "Erro ao cadastrar paciente: " + e
//! ```
//!
//! The three steps are exposed separately ([`RegistrationSubmitter::begin`],
//! [`RegistrationSubmitter::send`], [`RegistrationSubmitter::complete`]) so a
//! caller can have several requests in flight.  A reply is only written to the
//! page if no newer submission has started since; older replies come back as
//! [`SubmissionOutcome::Stale`] and leave the page untouched.
//!
//! There is no retry.  The request has no timeout unless the API
//! implementation is configured with one.

use healthy_core::domain::elements::{REGISTRATION_FORM, STATUS_MESSAGE};
use healthy_core::domain::status::failure_text;
use healthy_core::{
    select_status_text, should_reset_form, PatientRecord, RegistrationResponse, RequestSequence,
};
use tracing::{info, warn};

use super::api::{ApiError, PatientApi};
use super::page::{Page, PageError, SubmitEvent};

// ── Use case ──────────────────────────────────────────────────────────────────

/// A submission that has been read from the page but not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    /// Sequence number; only the latest one may update the page.
    pub sequence: u64,
    /// The record read from the form.
    pub record: PatientRecord,
}

/// What a completed submission did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server stored the patient; the message is shown and the form cleared.
    Accepted { status_text: String },
    /// The server answered without a success message; its text is shown and
    /// the form kept.
    Refused { status_text: String },
    /// The request failed; the prefixed error is shown and the form kept.
    Failed { status_text: String },
    /// A newer submission started before this reply arrived; the page was not
    /// touched.
    Stale { sequence: u64 },
}

impl SubmissionOutcome {
    /// Text written to the status element, `None` for a stale reply.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Accepted { status_text }
            | Self::Refused { status_text }
            | Self::Failed { status_text } => Some(status_text),
            Self::Stale { .. } => None,
        }
    }
}

/// Submits the registration form through a [`PatientApi`].
#[derive(Debug)]
pub struct RegistrationSubmitter<A> {
    api: A,
    sequence: RequestSequence,
}

impl<A: PatientApi> RegistrationSubmitter<A> {
    /// A submitter sending through `api`.
    pub fn new(api: A) -> Self {
        Self {
            api,
            sequence: RequestSequence::new(),
        }
    }

    /// Handles the whole submit: read, send, and show the outcome.
    ///
    /// # Errors
    ///
    /// A [`PageError`] if a form input or the status element is missing.  A
    /// failed request is not an error; it is reported as
    /// [`SubmissionOutcome::Failed`].
    pub async fn submit<P: Page + ?Sized>(
        &self,
        page: &mut P,
        event: &mut SubmitEvent,
    ) -> Result<SubmissionOutcome, PageError> {
        let pending = self.begin(&*page, event)?;
        let result = self.send(&pending).await;
        self.complete(page, pending.sequence, result)
    }

    /// Cancels the default submit, reads the form, and numbers the request.
    ///
    /// # Errors
    ///
    /// A [`PageError`] if a form input is missing.  The default action is
    /// cancelled even then.
    pub fn begin<P: Page + ?Sized>(
        &self,
        page: &P,
        event: &mut SubmitEvent,
    ) -> Result<PendingSubmission, PageError> {
        event.prevent_default();

        let record = PatientRecord::from_inputs(|id| page.input_value(id))?;
        let sequence = self.sequence.issue();

        info!(sequence, "registration submitted");
        Ok(PendingSubmission { sequence, record })
    }

    /// Sends a pending submission to the server.
    pub async fn send(&self, pending: &PendingSubmission) -> Result<RegistrationResponse, ApiError> {
        self.api.register(&pending.record).await
    }

    /// Writes the outcome of request `sequence` to the page.
    ///
    /// # Errors
    ///
    /// A [`PageError`] if the status element or the form is missing.
    pub fn complete<P: Page + ?Sized>(
        &self,
        page: &mut P,
        sequence: u64,
        result: Result<RegistrationResponse, ApiError>,
    ) -> Result<SubmissionOutcome, PageError> {
        if !self.sequence.is_current(sequence) {
            warn!(
                sequence,
                latest = self.sequence.latest(),
                "discarding reply to superseded registration"
            );
            return Ok(SubmissionOutcome::Stale { sequence });
        }

        match result {
            Ok(response) => {
                let status_text = select_status_text(&response);
                page.set_text(STATUS_MESSAGE, &status_text)?;

                if should_reset_form(&response) {
                    page.reset_form(REGISTRATION_FORM)?;
                    info!(sequence, %status_text, "registration accepted");
                    Ok(SubmissionOutcome::Accepted { status_text })
                } else {
                    info!(sequence, %status_text, "registration refused");
                    Ok(SubmissionOutcome::Refused { status_text })
                }
            }
            Err(e) => {
                warn!(sequence, error = %e, "registration request failed");
                let status_text = failure_text(&e);
                page.set_text(STATUS_MESSAGE, &status_text)?;
                Ok(SubmissionOutcome::Failed { status_text })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::MockPatientApi;
    use crate::infrastructure::memory_page::MemoryPage;

    fn filled_page() -> MemoryPage {
        let mut page = MemoryPage::registration_page(0);
        for (id, value) in [
            ("nomePaciente", "Maria Souza"),
            ("dataNascimento", "1990-04-12"),
            ("sexoPaciente", "F"),
            ("cpfPaciente", "123.456.789-00"),
            ("ruaPaciente", "Rua das Flores"),
            ("numeroPaciente", "10"),
            ("cidadePaciente", "Recife"),
            ("cepPaciente", "50000-000"),
        ] {
            page.set_input(id, value).unwrap();
        }
        page
    }

    fn api_replying(
        reply: impl Fn() -> Result<RegistrationResponse, ApiError> + Send + Sync + 'static,
    ) -> MockPatientApi {
        let mut api = MockPatientApi::new();
        api.expect_register()
            .times(1)
            .returning(move |_| reply());
        api
    }

    #[tokio::test]
    async fn test_message_reply_is_shown_and_clears_form() {
        // Arrange
        let submitter = RegistrationSubmitter::new(api_replying(|| {
            Ok(RegistrationResponse::message("ok"))
        }));
        let mut page = filled_page();
        let mut event = SubmitEvent::new();

        // Act
        let outcome = submitter.submit(&mut page, &mut event).await.unwrap();

        // Assert
        assert_eq!(outcome, SubmissionOutcome::Accepted { status_text: "ok".to_string() });
        assert_eq!(page.text(STATUS_MESSAGE).unwrap(), "ok");
        assert_eq!(page.input_value("nomePaciente").unwrap(), "");
        assert_eq!(page.input_value("cepPaciente").unwrap(), "");
        assert!(event.default_prevented());
    }

    #[tokio::test]
    async fn test_error_reply_is_shown_and_keeps_form() {
        // Arrange
        let submitter = RegistrationSubmitter::new(api_replying(|| {
            Ok(RegistrationResponse::error("CPF already exists"))
        }));
        let mut page = filled_page();

        // Act
        let outcome = submitter
            .submit(&mut page, &mut SubmitEvent::new())
            .await
            .unwrap();

        // Assert
        assert!(matches!(outcome, SubmissionOutcome::Refused { .. }));
        assert_eq!(page.text(STATUS_MESSAGE).unwrap(), "CPF already exists");
        assert_eq!(page.input_value("cpfPaciente").unwrap(), "123.456.789-00");
    }

    #[tokio::test]
    async fn test_transport_failure_shows_prefixed_error() {
        // Arrange
        let submitter = RegistrationSubmitter::new(api_replying(|| {
            Err(ApiError::Transport("connection refused".to_string()))
        }));
        let mut page = filled_page();

        // Act
        let outcome = submitter
            .submit(&mut page, &mut SubmitEvent::new())
            .await
            .unwrap();

        // Assert
        let expected = "Erro ao cadastrar paciente: request failed: connection refused";
        assert_eq!(outcome.status_text(), Some(expected));
        assert_eq!(page.text(STATUS_MESSAGE).unwrap(), expected);
        assert_eq!(page.input_value("nomePaciente").unwrap(), "Maria Souza");
    }

    #[tokio::test]
    async fn test_reply_without_fields_empties_status() {
        // Arrange: the status element still shows a previous outcome
        let submitter =
            RegistrationSubmitter::new(api_replying(|| Ok(RegistrationResponse::default())));
        let mut page = filled_page();
        page.set_text(STATUS_MESSAGE, "previous").unwrap();

        // Act
        let outcome = submitter
            .submit(&mut page, &mut SubmitEvent::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(outcome, SubmissionOutcome::Refused { status_text: String::new() });
        assert_eq!(page.text(STATUS_MESSAGE).unwrap(), "");
        assert_eq!(page.input_value("sexoPaciente").unwrap(), "F");
    }

    #[tokio::test]
    async fn test_record_read_from_form_is_sent_verbatim() {
        // Arrange
        let mut api = MockPatientApi::new();
        api.expect_register()
            .withf(|record: &PatientRecord| {
                record.name == "Maria Souza"
                    && record.tax_id == "123.456.789-00"
                    && record.address.city == "Recife"
                    && record.address.postal_code == "50000-000"
            })
            .times(1)
            .returning(|_| Ok(RegistrationResponse::message("ok")));
        let submitter = RegistrationSubmitter::new(api);
        let mut page = filled_page();

        // Act / Assert: the mock panics on a mismatching record
        submitter
            .submit(&mut page, &mut SubmitEvent::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_form_is_still_sent() {
        let mut api = MockPatientApi::new();
        api.expect_register()
            .withf(|record: &PatientRecord| *record == PatientRecord::default())
            .times(1)
            .returning(|_| Ok(RegistrationResponse::error("CPF obrigatório")));
        let submitter = RegistrationSubmitter::new(api);
        let mut page = MemoryPage::registration_page(0);

        let outcome = submitter
            .submit(&mut page, &mut SubmitEvent::new())
            .await
            .unwrap();

        assert_eq!(outcome.status_text(), Some("CPF obrigatório"));
    }

    #[tokio::test]
    async fn test_missing_input_prevents_default_and_sends_nothing() {
        // Arrange: a page without the form
        let mut api = MockPatientApi::new();
        api.expect_register().times(0);
        let submitter = RegistrationSubmitter::new(api);
        let mut page = MemoryPage::new();
        let mut event = SubmitEvent::new();

        // Act
        let result = submitter.submit(&mut page, &mut event).await;

        // Assert
        assert_eq!(
            result,
            Err(PageError::ElementNotFound("nomePaciente".to_string()))
        );
        assert!(event.default_prevented());
    }

    #[test]
    fn test_older_reply_after_newer_submission_is_discarded() {
        // Arrange: two submissions in flight
        let submitter = RegistrationSubmitter::new(MockPatientApi::new());
        let mut page = filled_page();
        let first = submitter.begin(&page, &mut SubmitEvent::new()).unwrap();
        let second = submitter.begin(&page, &mut SubmitEvent::new()).unwrap();

        // Act: the second reply lands first, then the first
        let newer = submitter
            .complete(&mut page, second.sequence, Ok(RegistrationResponse::error("duplicado")))
            .unwrap();
        let older = submitter
            .complete(&mut page, first.sequence, Ok(RegistrationResponse::message("ok")))
            .unwrap();

        // Assert: the newer outcome stays on the page and the form is kept
        assert!(matches!(newer, SubmissionOutcome::Refused { .. }));
        assert_eq!(older, SubmissionOutcome::Stale { sequence: first.sequence });
        assert_eq!(older.status_text(), None);
        assert_eq!(page.text(STATUS_MESSAGE).unwrap(), "duplicado");
        assert_eq!(page.input_value("nomePaciente").unwrap(), "Maria Souza");
    }

    #[test]
    fn test_begin_numbers_submissions_in_order() {
        let submitter = RegistrationSubmitter::new(MockPatientApi::new());
        let page = filled_page();

        let a = submitter.begin(&page, &mut SubmitEvent::new()).unwrap();
        let b = submitter.begin(&page, &mut SubmitEvent::new()).unwrap();

        assert!(b.sequence > a.sequence);
        assert_eq!(a.record, b.record);
    }

    #[test]
    fn test_body_error_text_is_prefixed() {
        // Arrange
        let submitter = RegistrationSubmitter::new(MockPatientApi::new());
        let mut page = filled_page();
        let pending = submitter.begin(&page, &mut SubmitEvent::new()).unwrap();
        let wire = healthy_core::decode_registration_response(b"<html>").unwrap_err();

        // Act
        let outcome = submitter
            .complete(&mut page, pending.sequence, Err(ApiError::from(wire)))
            .unwrap();

        // Assert
        let text = outcome.status_text().unwrap();
        assert!(text.starts_with("Erro ao cadastrar paciente: invalid JSON body: "), "{text}");
    }
}
