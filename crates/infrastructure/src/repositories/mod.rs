pub mod network_directory_repository;
pub mod settings_repository;

pub use network_directory_repository::SqliteNetworkDirectory;
pub use settings_repository::SqliteCredentialStore;
