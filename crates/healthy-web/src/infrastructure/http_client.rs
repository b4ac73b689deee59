//! [`PatientApi`] over HTTP, using `reqwest`.
//!
//! # Routes
//!
//! | Call                   | Request                                  | Reply                        |
//! |------------------------|------------------------------------------|------------------------------|
//! | `register`             | `POST {register_path}` JSON record       | `{message}` or `{error}`     |
//! | `fetch_patient`        | `GET {lookup_path}/{cpf}`                | stored record or `{error}`   |
//! | `list_patients`        | `GET {list_path}`                        | `[{id, nome, cpf}]`          |
//! | `list_patient_records` | `GET {records_path}`                     | `[{<bucket>: record}]`       |
//! | `create_exam`          | `POST {exam_create_path}` JSON exam      | `{message}` or `{error}`     |
//! | `list_exams`           | `GET {exam_list_path}/{cpf}`             | `[exam]` or `{error}`        |
//! | `remove_exam`          | `DELETE {exam_remove_path}/{cpf}/{date}` | `{message}` or `{error}`     |
//!
//! The registration reply is decoded whatever its status code: the server
//! answers refusals with 400 or 500 and a JSON `error`, and the page shows
//! those exactly like a success message.  Every other route turns a
//! non-success status into [`ApiError::Rejected`].

use async_trait::async_trait;
use healthy_core::protocol::wire::{
    decode_error_text, decode_exam_list, decode_patient, decode_patient_documents,
    decode_patient_list, decode_reply_text,
};
use healthy_core::{
    decode_registration_response, ExamEntry, ExamRequest, PatientRecord, PatientSummary,
    RegistrationResponse,
};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use tracing::debug;

use crate::application::api::{ApiError, PatientApi};
use crate::domain::ClientConfig;

/// Talks to the registration server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPatientApi {
    client: Client,
    config: ClientConfig,
}

impl HttpPatientApi {
    /// Builds a client for the server described by `config`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be initialised
    /// (for example, when the TLS backend fails to load).
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// `path` with each of `segments` appended as an escaped path segment.
    fn segment_url(&self, path: &str, segments: &[&str]) -> Result<Url, ApiError> {
        let base = self.config.endpoint(path);
        let mut url = Url::parse(&base)
            .map_err(|e| ApiError::Transport(format!("invalid URL {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport(format!("URL cannot take a path: {base}")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends `request` and returns the status and the whole body.
    async fn fetch(&self, request: RequestBuilder) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;
        debug!(%status, bytes = body.len(), "server replied");
        Ok((status, body.to_vec()))
    }

    /// Like [`fetch`](Self::fetch), but a non-success status is an error.
    async fn fetch_success(&self, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let (status, body) = self.fetch(request).await?;
        reject_unless_success(status, &body)?;
        Ok(body)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Maps a non-success status to [`ApiError::Rejected`].
fn reject_unless_success(status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message: decode_error_text(body).unwrap_or_else(|| status.to_string()),
    })
}

#[async_trait]
impl PatientApi for HttpPatientApi {
    async fn register(&self, record: &PatientRecord) -> Result<RegistrationResponse, ApiError> {
        let url = self.config.endpoint(&self.config.register_path);
        debug!(%url, "posting patient record");

        let (_status, body) = self.fetch(self.client.post(&url).json(record)).await?;
        Ok(decode_registration_response(&body)?)
    }

    async fn fetch_patient(&self, tax_id: &str) -> Result<PatientRecord, ApiError> {
        let url = self.segment_url(&self.config.lookup_path, &[tax_id])?;
        debug!(%url, "fetching patient");

        let body = self.fetch_success(self.client.get(url)).await?;
        Ok(decode_patient(&body)?)
    }

    async fn list_patients(&self) -> Result<Vec<PatientSummary>, ApiError> {
        let url = self.config.endpoint(&self.config.list_path);
        debug!(%url, "listing patients");

        let body = self.fetch_success(self.client.get(&url)).await?;
        Ok(decode_patient_list(&body)?)
    }

    async fn list_patient_records(&self) -> Result<Vec<PatientRecord>, ApiError> {
        let url = self.config.endpoint(&self.config.records_path);
        debug!(%url, "listing patient documents");

        let body = self.fetch_success(self.client.get(&url)).await?;
        Ok(decode_patient_documents(&body)?)
    }

    async fn create_exam(&self, exam: &ExamRequest) -> Result<String, ApiError> {
        let url = self.config.endpoint(&self.config.exam_create_path);
        debug!(%url, kind = %exam.kind, "posting exam");

        let body = self.fetch_success(self.client.post(&url).json(exam)).await?;
        Ok(decode_reply_text(&body)?)
    }

    async fn list_exams(&self, tax_id: &str) -> Result<Vec<ExamEntry>, ApiError> {
        let url = self.segment_url(&self.config.exam_list_path, &[tax_id])?;
        debug!(%url, "listing exams");

        let body = self.fetch_success(self.client.get(url)).await?;
        Ok(decode_exam_list(&body)?)
    }

    async fn remove_exam(&self, tax_id: &str, date: &str) -> Result<String, ApiError> {
        let url = self.segment_url(&self.config.exam_remove_path, &[tax_id, date])?;
        debug!(%url, "removing exam");

        let body = self.fetch_success(self.client.delete(url)).await?;
        Ok(decode_reply_text(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpPatientApi {
        HttpPatientApi::new(ClientConfig::with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_lookup_url_appends_tax_id_segment() {
        let client = api("http://127.0.0.1:5000");
        let url = client
            .segment_url(&client.config.lookup_path, &["123.456.789-00"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/consultar-paciente/123.456.789-00"
        );
    }

    #[test]
    fn test_lookup_url_escapes_path_characters() {
        let url = api("http://127.0.0.1:5000")
            .segment_url("/consultar-paciente", &["12/34 5"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/consultar-paciente/12%2F34%205"
        );
    }

    #[test]
    fn test_lookup_url_with_invalid_base_fails() {
        let result = api("not a url").segment_url("/consultar-paciente", &["1"]);
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[test]
    fn test_remove_url_appends_tax_id_and_date() {
        let client = api("http://127.0.0.1:5000/");
        let url = client
            .segment_url(&client.config.exam_remove_path, &["123", "2024-05-01"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/remover-exame/123/2024-05-01"
        );
    }

    #[test]
    fn test_success_status_is_not_rejected() {
        assert!(reject_unless_success(StatusCode::OK, b"[]").is_ok());
    }

    #[test]
    fn test_not_found_carries_server_error_text() {
        // Arrange
        let body = br#"{"error":"Patient not found"}"#;

        // Act
        let err = reject_unless_success(StatusCode::NOT_FOUND, body).unwrap_err();

        // Assert
        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Patient not found");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_rejection_without_json_falls_back_to_status_text() {
        let err = reject_unless_success(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "server refused the request (502): 502 Bad Gateway"
        );
    }
}
