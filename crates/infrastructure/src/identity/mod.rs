pub mod client;
pub mod document;
pub mod transport;

pub use client::IdentityServiceClient;
pub use document::IdentityDocument;
pub use transport::{HttpTransport, LookupTransport, TransportResponse};
