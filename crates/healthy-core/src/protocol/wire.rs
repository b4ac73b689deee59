//! JSON decoding of the bodies the server sends back.
//!
//! The functions here are pure: they take bytes and never touch a socket.  The
//! HTTP client in `healthy-web` calls them on the response bodies; request
//! bodies are serialized straight from the `serde` types in [`crate::domain`].
//!
//! # Reply decoding
//!
//! The registration route may answer with any HTTP status.  What matters is
//! whether the body is JSON:
//!
//! ```text
//! body parses as JSON  →  Ok(RegistrationResponse)   (message / error / neither)
//! body is not JSON     →  Err(WireError::InvalidJson)
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::domain::exam::{sort_newest_first, ExamEntry};
use crate::domain::patient::{PatientRecord, PatientSummary};
use crate::domain::status::{select_status_text, RegistrationResponse};

/// Errors produced while decoding a reply body.
#[derive(Debug, Error)]
pub enum WireError {
    /// The body is not valid JSON, or does not have the expected shape.
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Decodes the body of a registration reply.
///
/// # Errors
///
/// Returns [`WireError::InvalidJson`] if `body` is not valid JSON.
pub fn decode_registration_response(body: &[u8]) -> Result<RegistrationResponse, WireError> {
    let value: Value = serde_json::from_slice(body)?;
    Ok(RegistrationResponse::from_value(&value))
}

/// Decodes a stored patient document.
///
/// # Errors
///
/// Returns [`WireError::InvalidJson`] if `body` is not a patient document.
pub fn decode_patient(body: &[u8]) -> Result<PatientRecord, WireError> {
    decode(body)
}

/// Decodes the server's patient listing.
///
/// # Errors
///
/// Returns [`WireError::InvalidJson`] if `body` is not an array of summaries.
pub fn decode_patient_list(body: &[u8]) -> Result<Vec<PatientSummary>, WireError> {
    decode(body)
}

/// Decodes the full patient documents returned by the document listing.
///
/// The listing may wrap each document in an object keyed by the bucket name,
/// `[{"DevHealthy": {...}}]`; such rows are unwrapped.  Bare documents are
/// accepted as well.
///
/// # Errors
///
/// Returns [`WireError::InvalidJson`] if `body` is not an array of patient
/// documents.
pub fn decode_patient_documents(body: &[u8]) -> Result<Vec<PatientRecord>, WireError> {
    let rows: Vec<Value> = decode(body)?;
    rows.into_iter()
        .map(|row| serde_json::from_value(unwrap_bucket_row(row)).map_err(WireError::from))
        .collect()
}

fn unwrap_bucket_row(row: Value) -> Value {
    if let Value::Object(fields) = &row {
        if fields.len() == 1 && !fields.contains_key("cpf") {
            if let Some(inner) = fields.values().next().filter(|v| v.is_object()) {
                return inner.clone();
            }
        }
    }
    row
}

/// Decodes a patient's exam history, most recent first, with legacy detail
/// keys renamed.
///
/// # Errors
///
/// Returns [`WireError::InvalidJson`] if `body` is not an array of exams.
pub fn decode_exam_list(body: &[u8]) -> Result<Vec<ExamEntry>, WireError> {
    let mut exams: Vec<ExamEntry> = decode(body)?;
    exams.iter_mut().for_each(ExamEntry::upgrade_legacy_details);
    sort_newest_first(&mut exams);
    Ok(exams)
}

/// Decodes a `{message}` / `{error}` reply into the text to show, chosen the
/// same way as for a registration.
///
/// # Errors
///
/// Returns [`WireError::InvalidJson`] if `body` is not valid JSON.
pub fn decode_reply_text(body: &[u8]) -> Result<String, WireError> {
    decode_registration_response(body).map(|response| select_status_text(&response))
}

/// Extracts the `error` text from a refusal body, if there is one.
pub fn decode_error_text(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .map(|value| RegistrationResponse::from_value(&value))
        .and_then(|response| response.error)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, WireError> {
    Ok(serde_json::from_slice(body)?)
}
