use actix_multipart::{form::MultipartForm, Multipart};
use actix_web::{
    web::{self, Data},
    HttpResponse, Scope,
};
use tracing::info;

use crate::{
    api::{
        forms::{read_enroll_samples, VerifyVoiceForm},
        types::{VoiceEnrollResponse, VoiceVerifyResponse},
    },
    core::services::voice,
    utils::{config::LimitsConfig, error::ServiceError},
};

pub fn scope() -> Scope {
    web::scope("/voice")
        .service(web::resource("/enroll").route(web::post().to(enroll)))
        .service(web::resource("/verify").route(web::post().to(verify)))
}

async fn enroll(
    limits: Data<LimitsConfig>,
    payload: Multipart,
) -> Result<HttpResponse, ServiceError> {
    let samples = read_enroll_samples(payload, &limits).await?;
    let enrollment = voice::enroll(&samples);

    info!(
        enrollment_id = %enrollment.enrollment_id,
        samples = enrollment.samples,
        "Voice enrollment computed"
    );
    Ok(HttpResponse::Ok().json(VoiceEnrollResponse::from(enrollment)))
}

async fn verify(MultipartForm(form): MultipartForm<VerifyVoiceForm>) -> HttpResponse {
    let result = voice::verify(&form.enrollment_id, &form.file.data);

    info!(
        match_score = result.match_score,
        is_match = result.is_match,
        sample_bytes = form.file.data.len(),
        "Voice verification computed"
    );
    HttpResponse::Ok().json(VoiceVerifyResponse::from(result))
}
