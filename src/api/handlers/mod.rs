pub mod document;
pub mod health;
pub mod liveness;
pub mod voice;
