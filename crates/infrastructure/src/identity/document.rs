use netid_domain::{NetworkId, ResolutionError};
use serde::Deserialize;

/// Status value the identity service reports on a successful location lookup.
const STATUS_OK: &str = "ok";

/// Wire shape of a location response:
///
/// ```xml
/// <getLocation_Response>
///     <header>
///         <error>0</error>
///         <type>none</type>
///         <message>ok</message>
///         <description/>
///     </header>
///     <VLR_address>6593340088</VLR_address>
///     <MCC_MNC>24491</MCC_MNC>
/// </getLocation_Response>
/// ```
#[derive(Debug, Deserialize)]
struct LocationResponse {
    header: Option<ResponseHeader>,
    #[serde(rename = "MCC_MNC")]
    mcc_mnc: Option<String>,
    #[serde(rename = "VLR_address")]
    vlr_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseHeader {
    error: Option<String>,
    message: Option<String>,
    description: Option<String>,
}

/// Successful identity service answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityDocument {
    pub network_id: NetworkId,
    /// Visited location register the subscriber is attached to, when reported.
    pub vlr_address: Option<String>,
}

impl IdentityDocument {
    /// Parse a response body. Anything other than a well-formed document with
    /// status `ok` and a non-empty `MCC_MNC` is a `LookupFailed`.
    pub fn parse(body: &str) -> Result<Self, ResolutionError> {
        let response: LocationResponse = quick_xml::de::from_str(body.trim())
            .map_err(|e| ResolutionError::LookupFailed(format!("malformed response: {e}")))?;

        let header = response
            .header
            .ok_or_else(|| ResolutionError::LookupFailed("response has no header".to_string()))?;

        let status = non_empty(header.message).unwrap_or_default();
        if status != STATUS_OK {
            return Err(ResolutionError::LookupFailed(format!(
                "status '{}' (error {}): {}",
                status,
                non_empty(header.error).as_deref().unwrap_or("-"),
                non_empty(header.description).as_deref().unwrap_or("no description"),
            )));
        }

        let network_id = non_empty(response.mcc_mnc).ok_or_else(|| {
            ResolutionError::LookupFailed("response has no MCC_MNC".to_string())
        })?;

        Ok(Self {
            network_id: NetworkId::new(network_id),
            vlr_address: non_empty(response.vlr_address),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
