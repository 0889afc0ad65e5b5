// src/core/services/liveness.rs
use serde::Serialize;

use crate::core::round4;

pub const LIVE_THRESHOLD: f64 = 0.75;
const CENTERING_THRESHOLD: f64 = 0.7;
const BRIGHTNESS_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LivenessReason {
    FaceNotCentered,
    LowBrightness,
}

impl LivenessReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            LivenessReason::FaceNotCentered => "face_not_centered",
            LivenessReason::LowBrightness => "low_brightness",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LivenessAssessment {
    pub liveness: f64,
    pub is_live: bool,
    pub reasons: Vec<LivenessReason>,
}

/// Scores an image by its size alone: `0.5 + (len % 100) / 100 * 0.5`.
pub fn check(image: &[u8]) -> LivenessAssessment {
    let lv = 0.5 + ((image.len() % 100) as f64 / 100.0) * 0.5;

    let mut reasons = Vec::new();
    if lv < CENTERING_THRESHOLD {
        reasons.push(LivenessReason::FaceNotCentered);
    }
    if lv < BRIGHTNESS_THRESHOLD {
        reasons.push(LivenessReason::LowBrightness);
    }

    LivenessAssessment {
        liveness: round4(lv),
        is_live: lv >= LIVE_THRESHOLD,
        reasons,
    }
}
