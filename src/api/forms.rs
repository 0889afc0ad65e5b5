// src/api/forms.rs
use actix_multipart::{
    form::{bytes::Bytes, text::Text, MultipartForm, MultipartFormConfig},
    Multipart, MultipartError,
};
use actix_web::{error::PayloadError, HttpRequest};
use futures::TryStreamExt;
use tracing::warn;

use crate::utils::{config::LimitsConfig, error::ServiceError};

/// Field carrying enrollment samples; other fields are drained and ignored.
pub const ENROLL_FIELD: &str = "files";

#[derive(MultipartForm)]
pub struct VerifyVoiceForm {
    pub enrollment_id: Text<String>,
    pub file: Bytes,
}

#[derive(MultipartForm)]
pub struct ImageForm {
    pub image: Bytes,
}

/// Upload limits plus the mapping of extraction failures onto service errors.
pub fn form_config(limits: &LimitsConfig) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(limits.max_upload_bytes)
        .memory_limit(limits.max_upload_bytes)
        .error_handler(handle_form_error)
}

fn handle_form_error(err: MultipartError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), "Rejected multipart form: {}", err);
    classify(err).into()
}

fn classify(err: MultipartError) -> ServiceError {
    match &err {
        MultipartError::Payload(PayloadError::Overflow) => {
            ServiceError::PayloadTooLarge(err.to_string())
        }
        _ => ServiceError::Validation(err.to_string()),
    }
}

/// Collects every `files` part in upload order.
///
/// A body holding only the closing boundary ends before any part is seen;
/// that is read as zero samples rather than a framing error.
pub async fn read_enroll_samples(
    mut payload: Multipart,
    limits: &LimitsConfig,
) -> Result<Vec<Vec<u8>>, ServiceError> {
    let mut samples = Vec::new();
    let mut seen_parts = false;
    let mut total = 0usize;

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(MultipartError::Incomplete) if !seen_parts => break,
            Err(err) => {
                warn!("Rejected enrollment form: {}", err);
                return Err(classify(err));
            }
        };
        seen_parts = true;

        let is_sample = field.name() == ENROLL_FIELD;
        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(classify)? {
            total += chunk.len();
            if total > limits.max_upload_bytes {
                return Err(ServiceError::PayloadTooLarge(format!(
                    "upload exceeds {} bytes",
                    limits.max_upload_bytes
                )));
            }
            if is_sample {
                data.extend_from_slice(&chunk);
            }
        }

        if is_sample {
            samples.push(data);
        }
    }

    Ok(samples)
}
