//! Netid Resolver Infrastructure Layer
//!
//! Adapters for the application ports: the HTTP identity service client,
//! SQLite-backed directory and settings stores, and the system clock.
pub mod database;
pub mod identity;
pub mod repositories;
pub mod system;
