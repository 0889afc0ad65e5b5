// src/core/fingerprint.rs
use std::fmt;

use ring::digest::{Context, SHA256};

/// Bytes hashed in place of an empty enrollment upload.
pub const EMPTY_SENTINEL: &[u8] = b"empty";

/// Number of fingerprint characters handed out as an enrollment id.
pub const ENROLLMENT_ID_LEN: usize = 16;

/// Lowercase hex SHA-256 digest of uploaded content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(bytes: &[u8]) -> Self {
        Self::of_parts(std::iter::once(bytes))
    }

    /// Digest of the parts concatenated in order, without a delimiter.
    pub fn of_parts<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut context = Context::new(&SHA256);
        for part in parts {
            context.update(part);
        }
        Self(hex::encode(context.finish().as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading `len` hex characters (the whole digest if shorter).
    pub fn prefix(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }

    pub fn enrollment_id(&self) -> EnrollmentId {
        EnrollmentId(self.prefix(ENROLLMENT_ID_LEN).to_owned())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Truncated fingerprint returned to callers. Never stored server side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnrollmentId(String);

impl EnrollmentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EnrollmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Count of leading identical characters, stopping at the first mismatch.
pub fn prefix_match_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}
