//! PatientApi: the registration server as seen by the use cases.
//!
//! The page only ever registers patients.  The remaining routes back the
//! command-line client: patient lookups and the exam history kept for each
//! patient.

use async_trait::async_trait;
use healthy_core::{ExamEntry, ExamRequest, PatientRecord, PatientSummary, RegistrationResponse, WireError};
use thiserror::Error;

/// Errors returned by a [`PatientApi`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the reply could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// A body was not the JSON the client expected.
    #[error(transparent)]
    Body(#[from] WireError),

    /// The server answered with a non-success status.
    #[error("server refused the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientApi: Send + Sync {
    /// Submits a new patient.
    ///
    /// Any HTTP status is accepted as long as the reply body is JSON.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] if the request fails, [`ApiError::Body`] if the
    /// reply is not JSON.
    async fn register(&self, record: &PatientRecord) -> Result<RegistrationResponse, ApiError>;

    /// Fetches the stored patient with CPF `tax_id`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] when the server reports the patient missing, plus
    /// the transport and body errors of [`register`](Self::register).
    async fn fetch_patient(&self, tax_id: &str) -> Result<PatientRecord, ApiError>;

    /// Lists stored patients.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_patient`](Self::fetch_patient).
    async fn list_patients(&self) -> Result<Vec<PatientSummary>, ApiError>;

    /// Lists every stored patient document in full.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_patient`](Self::fetch_patient).
    async fn list_patient_records(&self) -> Result<Vec<PatientRecord>, ApiError>;

    /// Stores a new exam and returns the server's confirmation text.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] when the exam already exists, plus the transport
    /// and body errors.
    async fn create_exam(&self, exam: &ExamRequest) -> Result<String, ApiError>;

    /// Exam history of the patient with CPF `tax_id`, most recent first.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] when the patient is unknown, plus the transport
    /// and body errors.
    async fn list_exams(&self, tax_id: &str) -> Result<Vec<ExamEntry>, ApiError>;

    /// Removes the exam taken on `date` by the patient with CPF `tax_id` and
    /// returns the server's confirmation text.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] when there is no such exam, plus the transport
    /// and body errors.
    async fn remove_exam(&self, tax_id: &str, date: &str) -> Result<String, ApiError>;
}
