pub mod document;
pub mod liveness;
pub mod voice;
