use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Scope};
use tracing::info;

use crate::{
    api::{forms::ImageForm, types::DocumentVerifyResponse},
    core::services::document,
};

pub fn scope() -> Scope {
    web::scope("/document")
        .service(web::resource("/verify").route(web::post().to(verify)))
}

async fn verify(MultipartForm(form): MultipartForm<ImageForm>) -> HttpResponse {
    let record = document::verify(&form.image.data);

    info!(
        text_extracted = %record.text_extracted,
        tamper_flag = record.tamper_flag,
        "Document verification computed"
    );
    HttpResponse::Ok().json(DocumentVerifyResponse::from(record))
}
