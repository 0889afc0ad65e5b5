#[path = "../common/mod.rs"]
mod common;

mod document_tests;
mod health_tests;
mod liveness_tests;
