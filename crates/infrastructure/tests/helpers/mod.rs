mod fake_identity_service;

pub use fake_identity_service::*;
