// src/core/services/voice.rs
use crate::core::{
    fingerprint::{prefix_match_len, EnrollmentId, Fingerprint, EMPTY_SENTINEL, ENROLLMENT_ID_LEN},
    round4,
};

pub const MIN_MATCH_SCORE: f64 = 0.5;
pub const MATCH_SCORE_SPAN: f64 = 0.48;
pub const MATCH_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub samples: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceMatch {
    pub match_score: f64,
    pub is_match: bool,
}

/// Derives an enrollment id from the samples concatenated in upload order.
///
/// An empty concatenation hashes [`EMPTY_SENTINEL`] instead, so zero samples
/// (or only zero-length ones) still produce a well-defined id.
pub fn enroll<S: AsRef<[u8]>>(samples: &[S]) -> Enrollment {
    let is_empty = samples.iter().all(|s| s.as_ref().is_empty());
    let fingerprint = if is_empty {
        Fingerprint::of(EMPTY_SENTINEL)
    } else {
        Fingerprint::of_parts(samples.iter().map(|s| s.as_ref()))
    };

    Enrollment {
        enrollment_id: fingerprint.enrollment_id(),
        samples: samples.len(),
    }
}

/// Scores a sample against a caller supplied enrollment id.
///
/// Any id is accepted; nothing is looked up.
pub fn verify(enrollment_id: &str, sample: &[u8]) -> VoiceMatch {
    let fingerprint = Fingerprint::of(sample);
    let matched = prefix_match_len(enrollment_id, fingerprint.as_str());
    let score = match_score(matched);

    VoiceMatch {
        match_score: round4(score),
        is_match: score >= MATCH_THRESHOLD,
    }
}

fn match_score(matched_chars: usize) -> f64 {
    let ratio = (matched_chars as f64 / ENROLLMENT_ID_LEN as f64).min(1.0);
    MIN_MATCH_SCORE + ratio * MATCH_SCORE_SPAN
}
