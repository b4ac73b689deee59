//! The patient record submitted to the registration server.
//!
//! A record is built fresh from the form on every submission and handed to the
//! server as the request body.  All fields are the raw text typed by the user:
//! nothing is trimmed, validated, or coerced, and an empty input is an empty
//! string.
//!
//! # Wire names
//!
//! The server stores the record as-is and uses Portuguese keys:
//!
//! ```json
//! {
//!   "nome": "Maria Souza",
//!   "dataNascimento": "1990-04-12",
//!   "sexo": "F",
//!   "cpf": "123.456.789-00",
//!   "endereco": { "rua": "Rua A", "numero": "10", "cidade": "Recife", "cep": "50000-000" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::elements::{
    BIRTH_DATE_INPUT, CITY_INPUT, NAME_INPUT, NUMBER_INPUT, POSTAL_CODE_INPUT, SEX_INPUT,
    STREET_INPUT, TAX_ID_INPUT,
};

/// Prefix of a stored patient's document id.
pub const PATIENT_ID_PREFIX: &str = "paciente::";

/// Document id the server stores the patient with CPF `tax_id` under.
pub fn patient_document_id(tax_id: &str) -> String {
    format!("{PATIENT_ID_PREFIX}{tax_id}")
}

/// A patient as entered on the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    #[serde(rename = "sexo")]
    pub sex: String,
    /// CPF, the Brazilian individual taxpayer number.  The server keys the
    /// stored document on it.
    #[serde(rename = "cpf")]
    pub tax_id: String,
    #[serde(rename = "endereco")]
    pub address: Address,
}

/// Postal address nested inside a [`PatientRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "cidade")]
    pub city: String,
    /// CEP, the Brazilian postal code.
    #[serde(rename = "cep")]
    pub postal_code: String,
}

impl PatientRecord {
    /// Builds a record by reading each form input through `read`.
    ///
    /// `read` receives an input id from [`super::elements`] and returns the
    /// input's current text.  The first error stops the build.
    ///
    /// ```rust
    /// use healthy_core::PatientRecord;
    ///
    /// let record = PatientRecord::from_inputs(|id| Ok::<_, ()>(format!("<{id}>"))).unwrap();
    /// assert_eq!(record.name, "<nomePaciente>");
    /// assert_eq!(record.address.postal_code, "<cepPaciente>");
    /// ```
    pub fn from_inputs<E, F>(mut read: F) -> Result<Self, E>
    where
        F: FnMut(&str) -> Result<String, E>,
    {
        Ok(Self {
            name: read(NAME_INPUT)?,
            birth_date: read(BIRTH_DATE_INPUT)?,
            sex: read(SEX_INPUT)?,
            tax_id: read(TAX_ID_INPUT)?,
            address: Address {
                street: read(STREET_INPUT)?,
                number: read(NUMBER_INPUT)?,
                city: read(CITY_INPUT)?,
                postal_code: read(POSTAL_CODE_INPUT)?,
            },
        })
    }
}

/// One row of the server's patient listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    /// Server-side document id, e.g. `paciente::123.456.789-00`.
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cpf")]
    pub tax_id: String,
}
