use thiserror::Error;

/// Failures surfaced by the resolution pipeline.
///
/// `Clone` because a single coalesced lookup hands the same outcome to every
/// caller that joined it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Identity service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Identity service rejected credentials after refresh")]
    AuthenticationFailed,

    #[error("Identity lookup failed: {0}")]
    LookupFailed(String),

    #[error("Unknown network id: {0}")]
    UnknownIdentifier(String),

    #[error("Network directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Credential store unavailable: {0}")]
    CredentialsUnavailable(String),

    #[error("Invalid subscriber id: {0}")]
    InvalidSubscriber(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
