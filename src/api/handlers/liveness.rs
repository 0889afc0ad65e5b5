use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Scope};
use tracing::info;

use crate::{
    api::{forms::ImageForm, types::LivenessResponse},
    core::services::liveness,
};

pub fn scope() -> Scope {
    web::scope("/liveness")
        .service(web::resource("/check").route(web::post().to(check)))
}

async fn check(MultipartForm(form): MultipartForm<ImageForm>) -> HttpResponse {
    let assessment = liveness::check(&form.image.data);

    info!(
        liveness = assessment.liveness,
        is_live = assessment.is_live,
        reasons = assessment.reasons.len(),
        "Liveness check computed"
    );
    HttpResponse::Ok().json(LivenessResponse::from(assessment))
}
