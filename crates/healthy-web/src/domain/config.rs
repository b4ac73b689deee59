//! Client configuration.
//!
//! [`ClientConfig`] says where the registration server lives and which routes
//! to call.  Every field has a default, so an empty or missing config file
//! gives a working client against a local development server.
//!
//! ```toml
//! base_url = "http://127.0.0.1:5000"
//! register_path = "/cadastrar-paciente"
//! lookup_path = "/consultar-paciente"
//! list_path = "/obter-pacientes"
//! records_path = "/consultar-pacientes"
//! exam_create_path = "/criar-exame"
//! exam_list_path = "/api/consultar-exames"
//! exam_remove_path = "/api/remover-exame"
//! # request_timeout_secs = 10
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// All runtime configuration for the registration client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme, host, and port of the registration server, without a trailing
    /// path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Route that accepts a new patient record (`POST`).
    #[serde(default = "default_register_path")]
    pub register_path: String,

    /// Route that returns one stored patient; the CPF is appended as the last
    /// path segment (`GET`).
    #[serde(default = "default_lookup_path")]
    pub lookup_path: String,

    /// Route that lists stored patients (`GET`).
    #[serde(default = "default_list_path")]
    pub list_path: String,

    /// Route that returns every stored patient document in full (`GET`).
    #[serde(default = "default_records_path")]
    pub records_path: String,

    /// Route that accepts a new exam (`POST`).
    #[serde(default = "default_exam_create_path")]
    pub exam_create_path: String,

    /// Route that returns a patient's exams; the CPF is appended (`GET`).
    #[serde(default = "default_exam_list_path")]
    pub exam_list_path: String,

    /// Route that removes an exam; the CPF and the exam date are appended
    /// (`DELETE`).
    #[serde(default = "default_exam_remove_path")]
    pub exam_remove_path: String,

    /// Upper bound on a whole request, in seconds.  Absent means the client
    /// waits for as long as the server takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_register_path() -> String {
    "/cadastrar-paciente".to_string()
}
fn default_lookup_path() -> String {
    "/consultar-paciente".to_string()
}
fn default_list_path() -> String {
    "/obter-pacientes".to_string()
}
fn default_records_path() -> String {
    "/consultar-pacientes".to_string()
}
fn default_exam_create_path() -> String {
    "/criar-exame".to_string()
}
fn default_exam_list_path() -> String {
    "/api/consultar-exames".to_string()
}
fn default_exam_remove_path() -> String {
    "/api/remover-exame".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            register_path: default_register_path(),
            lookup_path: default_lookup_path(),
            list_path: default_list_path(),
            records_path: default_records_path(),
            exam_create_path: default_exam_create_path(),
            exam_list_path: default_exam_list_path(),
            exam_remove_path: default_exam_remove_path(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Configuration for a server at `base_url`, all other fields default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// The request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Joins the base URL and `path`, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
