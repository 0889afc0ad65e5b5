// src/api/types.rs
use serde::Serialize;

use crate::core::services::{
    document::DocumentRecord,
    liveness::{LivenessAssessment, LivenessReason},
    voice::{Enrollment, VoiceMatch},
};

/// Envelope used by the service endpoints (`/health`, `/metrics`).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VoiceEnrollResponse {
    pub enrollment_id: String,
    pub samples: usize,
}

impl From<Enrollment> for VoiceEnrollResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            enrollment_id: enrollment.enrollment_id.into_string(),
            samples: enrollment.samples,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoiceVerifyResponse {
    pub match_score: f64,
    pub is_match: bool,
}

impl From<VoiceMatch> for VoiceVerifyResponse {
    fn from(result: VoiceMatch) -> Self {
        Self {
            match_score: result.match_score,
            is_match: result.is_match,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub liveness: f64,
    pub is_live: bool,
    pub reasons: Vec<LivenessReason>,
}

impl From<LivenessAssessment> for LivenessResponse {
    fn from(assessment: LivenessAssessment) -> Self {
        Self {
            liveness: assessment.liveness,
            is_live: assessment.is_live,
            reasons: assessment.reasons,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentVerifyResponse {
    pub text_extracted: String,
    pub tamper_flag: bool,
    pub face_region_base64: Option<String>,
}

impl From<DocumentRecord> for DocumentVerifyResponse {
    fn from(record: DocumentRecord) -> Self {
        Self {
            text_extracted: record.text_extracted,
            tamper_flag: record.tamper_flag,
            face_region_base64: record.face_region_base64,
        }
    }
}
