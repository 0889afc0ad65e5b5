// src/core/services/document.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::core::fingerprint::Fingerprint;

pub const TEXT_PREFIX: &str = "DOC-";
const TEXT_DIGEST_CHARS: usize = 10;
const PLACEHOLDER_REGION: &[u8] = b"placeholder_region";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub text_extracted: String,
    pub tamper_flag: bool,
    pub face_region_base64: Option<String>,
}

pub fn verify(image: &[u8]) -> DocumentRecord {
    let fingerprint = Fingerprint::of(image);

    DocumentRecord {
        text_extracted: format!("{}{}", TEXT_PREFIX, fingerprint.prefix(TEXT_DIGEST_CHARS)),
        tamper_flag: image.len() % 2 == 1,
        face_region_base64: Some(STANDARD.encode(PLACEHOLDER_REGION)),
    }
}
