use std::fmt;
use std::sync::Arc;

/// Mobile network identifier (MCC followed by MNC), e.g. `24491`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkId(Arc<str>);

impl NetworkId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_arc(&self) -> Arc<str> {
        Arc::clone(&self.0)
    }

    /// Mobile country code: always the first three digits.
    pub fn mcc(&self) -> Option<&str> {
        self.0.get(..3)
    }

    /// Mobile network code: the two or three digits after the MCC.
    pub fn mnc(&self) -> Option<&str> {
        self.0.get(3..).filter(|mnc| !mnc.is_empty())
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Network row from the operator-maintained directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownNetwork {
    pub id: NetworkId,
    pub display_name: Arc<str>,
    pub country_name: Arc<str>,
}

impl KnownNetwork {
    pub fn new(
        id: impl Into<Arc<str>>,
        display_name: impl Into<Arc<str>>,
        country_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: NetworkId::new(id),
            display_name: display_name.into(),
            country_name: country_name.into(),
        }
    }
}
