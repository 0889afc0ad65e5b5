pub mod fingerprint;
pub mod services;

pub use fingerprint::{prefix_match_len, EnrollmentId, Fingerprint};

/// Rounds to four decimal places, the precision every reported score uses.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
