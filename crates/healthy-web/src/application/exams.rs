//! Recording an exam for a registered patient.

use healthy_core::{ExamDetails, ExamKind, ExamRequest};
use tracing::{info, warn};

use super::api::{ApiError, PatientApi};

/// Stores an exam of `kind` taken on `date` by the patient with CPF `tax_id`.
///
/// `raw` holds whatever detail fields the caller collected; only the ones the
/// server keeps for `kind` are sent.  Returns the server's confirmation text.
///
/// # Errors
///
/// Whatever [`PatientApi::create_exam`] returns.
pub async fn record_exam<A: PatientApi + ?Sized>(
    api: &A,
    tax_id: &str,
    kind: ExamKind,
    date: &str,
    raw: &ExamDetails,
) -> Result<String, ApiError> {
    let request = ExamRequest::new(tax_id, kind, date, raw);
    let dropped = raw.keys().filter(|k| !request.details.contains_key(*k)).count();
    info!(patient_id = %request.patient_id, kind = %request.kind, date, dropped, "recording exam");

    match api.create_exam(&request).await {
        Ok(message) => {
            info!(patient_id = %request.patient_id, %message, "exam recorded");
            Ok(message)
        }
        Err(e) => {
            warn!(patient_id = %request.patient_id, error = %e, "exam not recorded");
            Err(e)
        }
    }
}
