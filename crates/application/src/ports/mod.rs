pub mod clock;
pub mod credential_store;
pub mod identity_lookup;
pub mod network_directory;

pub use clock::Clock;
pub use credential_store::CredentialStore;
pub use identity_lookup::IdentityLookup;
pub use network_directory::NetworkDirectory;
