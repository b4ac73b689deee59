//! Exams recorded against a stored patient.
//!
//! The server keeps a fixed pair of detail fields for each known exam kind and
//! drops everything else the form sent:
//!
//! | Kind                  | Detail keys                      |
//! |-----------------------|----------------------------------|
//! | `Sangue`              | `hemoglobina`, `leucocitos`      |
//! | `Urina`               | `ph`, `densidade`                |
//! | `Eletrocardiograma`   | `frequenciaCardiaca`, `ritmo`    |
//! | `Raio-X`, `Ultrassom` | `observacoes`, `regiao`          |
//!
//! Any other kind is stored with its details untouched.  [`shape_details`]
//! applies the same rule on the client so the request body already has the
//! shape the server will store.
//!
//! Older electrocardiogram documents carry the heart rate under `frequencia`;
//! [`ExamEntry::upgrade_legacy_details`] renames it on read.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::patient::patient_document_id;

/// Free-form detail fields of an exam, keyed by their wire names.
pub type ExamDetails = Map<String, Value>;

pub const HEART_RATE: &str = "frequenciaCardiaca";
/// Key older electrocardiogram documents used for [`HEART_RATE`].
pub const LEGACY_HEART_RATE: &str = "frequencia";

/// Kind of exam, as named on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExamKind {
    Blood,
    Urine,
    Electrocardiogram,
    XRay,
    Ultrasound,
    /// A kind the server stores without reshaping.
    Other(String),
}

impl ExamKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Blood => "Sangue",
            Self::Urine => "Urina",
            Self::Electrocardiogram => "Eletrocardiograma",
            Self::XRay => "Raio-X",
            Self::Ultrasound => "Ultrassom",
            Self::Other(name) => name,
        }
    }

    /// Detail keys kept for this kind, `None` when details are kept as sent.
    pub fn detail_keys(&self) -> Option<[&'static str; 2]> {
        match self {
            Self::Blood => Some(["hemoglobina", "leucocitos"]),
            Self::Urine => Some(["ph", "densidade"]),
            Self::Electrocardiogram => Some([HEART_RATE, "ritmo"]),
            Self::XRay | Self::Ultrasound => Some(["observacoes", "regiao"]),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for ExamKind {
    fn from(name: &str) -> Self {
        match name {
            "Sangue" => Self::Blood,
            "Urina" => Self::Urine,
            "Eletrocardiograma" => Self::Electrocardiogram,
            "Raio-X" => Self::XRay,
            "Ultrassom" => Self::Ultrasound,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ExamKind {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<ExamKind> for String {
    fn from(kind: ExamKind) -> Self {
        match kind {
            ExamKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keeps only the detail fields the server stores for `kind`.
///
/// A known kind always yields exactly its two keys, `null` where the input
/// had none.  For an electrocardiogram a blank `frequenciaCardiaca` falls back
/// to `frequencia`.
///
/// ```rust
/// use healthy_core::domain::exam::{shape_details, ExamDetails, ExamKind};
/// use serde_json::json;
///
/// let raw: ExamDetails = json!({"ph": "6.5", "cor": "amarela"}).as_object().unwrap().clone();
/// let shaped = shape_details(&ExamKind::Urine, &raw);
/// assert_eq!(shaped.get("ph"), Some(&json!("6.5")));
/// assert_eq!(shaped.get("densidade"), Some(&json!(null)));
/// assert!(!shaped.contains_key("cor"));
/// ```
pub fn shape_details(kind: &ExamKind, raw: &ExamDetails) -> ExamDetails {
    let Some(keys) = kind.detail_keys() else {
        return raw.clone();
    };

    keys.iter()
        .map(|&key| {
            let value = if key == HEART_RATE {
                raw.get(HEART_RATE)
                    .filter(|v| !is_blank(v))
                    .or_else(|| raw.get(LEGACY_HEART_RATE))
            } else {
                raw.get(key)
            };
            (key.to_string(), value.cloned().unwrap_or(Value::Null))
        })
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(true) => false,
    }
}

/// Body of a new exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRequest {
    /// Document id of the patient, `paciente::<cpf>`.
    #[serde(rename = "pacienteId")]
    pub patient_id: String,
    #[serde(rename = "tipoExame")]
    pub kind: ExamKind,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "detalhes")]
    pub details: ExamDetails,
}

impl ExamRequest {
    /// An exam for the patient with CPF `tax_id`, details shaped for `kind`.
    pub fn new(tax_id: &str, kind: ExamKind, date: impl Into<String>, raw: &ExamDetails) -> Self {
        Self {
            patient_id: patient_document_id(tax_id),
            details: shape_details(&kind, raw),
            kind,
            date: date.into(),
        }
    }
}

/// One exam in a patient's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEntry {
    /// Server-side document id.
    #[serde(default)]
    pub id: String,
    #[serde(rename = "tipo")]
    pub kind: ExamKind,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "detalhes", default)]
    pub details: ExamDetails,
    #[serde(rename = "pacienteNome", default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
}

impl ExamEntry {
    /// Moves a legacy `frequencia` detail to `frequenciaCardiaca`.
    ///
    /// Only electrocardiograms are touched.  The legacy value wins over an
    /// existing `frequenciaCardiaca`.
    pub fn upgrade_legacy_details(&mut self) {
        if self.kind != ExamKind::Electrocardiogram {
            return;
        }
        if let Some(rate) = self.details.remove(LEGACY_HEART_RATE) {
            self.details.insert(HEART_RATE.to_string(), rate);
        }
    }
}

/// Orders `exams` by date, most recent first.  Equal dates keep their order.
///
/// Dates compare as text, which orders ISO `YYYY-MM-DD` dates correctly.
pub fn sort_newest_first(exams: &mut [ExamEntry]) {
    exams.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(value: Value) -> ExamDetails {
        value.as_object().cloned().unwrap()
    }

    fn entry(kind: ExamKind, date: &str) -> ExamEntry {
        ExamEntry {
            id: format!("exame::{date}"),
            kind,
            date: date.to_string(),
            details: ExamDetails::new(),
            patient_name: None,
        }
    }

    #[test]
    fn test_known_kinds_round_trip_their_wire_names() {
        for name in ["Sangue", "Urina", "Eletrocardiograma", "Raio-X", "Ultrassom"] {
            let kind = ExamKind::from(name);
            assert!(!matches!(kind, ExamKind::Other(_)), "{name}");
            assert_eq!(String::from(kind), name);
        }
    }

    #[test]
    fn test_unknown_kind_keeps_its_name() {
        let kind = ExamKind::from("Tomografia".to_string());
        assert_eq!(kind, ExamKind::Other("Tomografia".to_string()));
        assert_eq!(kind.to_string(), "Tomografia");
        assert_eq!(kind.detail_keys(), None);
    }

    #[test]
    fn test_blood_details_keep_only_their_keys() {
        // Arrange
        let raw = details(json!({"hemoglobina": "13.5", "leucocitos": "7000", "extra": 1}));

        // Act
        let shaped = shape_details(&ExamKind::Blood, &raw);

        // Assert
        assert_eq!(
            Value::Object(shaped),
            json!({"hemoglobina": "13.5", "leucocitos": "7000"})
        );
    }

    #[test]
    fn test_missing_keys_become_null() {
        let shaped = shape_details(&ExamKind::Ultrasound, &ExamDetails::new());
        assert_eq!(Value::Object(shaped), json!({"observacoes": null, "regiao": null}));
    }

    #[test]
    fn test_xray_and_ultrasound_share_a_shape() {
        let raw = details(json!({"observacoes": "sem alteracoes", "regiao": "torax"}));
        assert_eq!(
            shape_details(&ExamKind::XRay, &raw),
            shape_details(&ExamKind::Ultrasound, &raw)
        );
    }

    #[test]
    fn test_heart_rate_falls_back_to_legacy_key() {
        // Arrange: the form sent only the legacy key, or a blank current one
        let legacy_only = details(json!({"frequencia": "72", "ritmo": "sinusal"}));
        let blank_current = details(json!({"frequenciaCardiaca": "", "frequencia": "80"}));

        // Act
        let a = shape_details(&ExamKind::Electrocardiogram, &legacy_only);
        let b = shape_details(&ExamKind::Electrocardiogram, &blank_current);

        // Assert
        assert_eq!(Value::Object(a), json!({"frequenciaCardiaca": "72", "ritmo": "sinusal"}));
        assert_eq!(b.get(HEART_RATE), Some(&json!("80")));
        assert!(!b.contains_key(LEGACY_HEART_RATE));
    }

    #[test]
    fn test_current_heart_rate_wins_when_present() {
        let raw = details(json!({"frequenciaCardiaca": 65, "frequencia": 80}));
        let shaped = shape_details(&ExamKind::Electrocardiogram, &raw);
        assert_eq!(shaped.get(HEART_RATE), Some(&json!(65)));
    }

    #[test]
    fn test_other_kind_details_pass_through() {
        let raw = details(json!({"contraste": true, "laudo": "ok"}));
        let shaped = shape_details(&ExamKind::Other("Tomografia".to_string()), &raw);
        assert_eq!(shaped, raw);
    }

    #[test]
    fn test_request_serializes_with_server_field_names() {
        // Arrange
        let raw = details(json!({"ph": "6.5", "densidade": "1.020"}));

        // Act
        let request = ExamRequest::new("123", ExamKind::Urine, "2024-05-01", &raw);

        // Assert
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "pacienteId": "paciente::123",
                "tipoExame": "Urina",
                "data": "2024-05-01",
                "detalhes": {"ph": "6.5", "densidade": "1.020"}
            })
        );
    }

    #[test]
    fn test_entry_deserializes_history_row() {
        let row = json!({
            "id": "exame::paciente::1::Sangue::2024-01-10",
            "tipo": "Sangue",
            "data": "2024-01-10",
            "detalhes": {"hemoglobina": "14"},
            "pacienteNome": "Maria"
        });

        let entry: ExamEntry = serde_json::from_value(row).unwrap();

        assert_eq!(entry.kind, ExamKind::Blood);
        assert_eq!(entry.patient_name.as_deref(), Some("Maria"));
        assert_eq!(entry.details.get("hemoglobina"), Some(&json!("14")));
    }

    #[test]
    fn test_legacy_heart_rate_is_renamed_on_electrocardiograms_only() {
        // Arrange
        let mut ecg = entry(ExamKind::Electrocardiogram, "2024-01-01");
        ecg.details = details(json!({"frequencia": 70, "ritmo": "sinusal"}));
        let mut other = entry(ExamKind::Other("Holter".to_string()), "2024-01-01");
        other.details = details(json!({"frequencia": 70}));

        // Act
        ecg.upgrade_legacy_details();
        other.upgrade_legacy_details();

        // Assert
        assert_eq!(
            Value::Object(ecg.details),
            json!({"frequenciaCardiaca": 70, "ritmo": "sinusal"})
        );
        assert!(other.details.contains_key(LEGACY_HEART_RATE));
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        // Arrange
        let mut exams = vec![
            entry(ExamKind::Blood, "2023-12-01"),
            entry(ExamKind::Urine, "2024-03-05"),
            entry(ExamKind::XRay, "2023-12-01"),
        ];

        // Act
        sort_newest_first(&mut exams);

        // Assert
        let order: Vec<_> = exams.iter().map(|e| (e.date.as_str(), e.kind.as_str())).collect();
        assert_eq!(
            order,
            vec![("2024-03-05", "Urina"), ("2023-12-01", "Sangue"), ("2023-12-01", "Raio-X")]
        );
    }
}
