use crate::errors::ResolutionError;
use crate::validators::validate_msisdn_digits;
use std::fmt;
use std::sync::Arc;

/// Subscriber identifier (mobile number) in normalized form: digits only,
/// no leading `+`.
///
/// Uses `Arc<str>` so the same key can sit in the cache, the in-flight table
/// and the backoff table without reallocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Msisdn(Arc<str>);

impl Msisdn {
    pub fn parse(raw: &str) -> Result<Self, ResolutionError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

        validate_msisdn_digits(digits).map_err(ResolutionError::InvalidSubscriber)?;

        Ok(Self(Arc::from(digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Msisdn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
