//! Netid Resolver Application Layer
//!
//! Ports for the external collaborators and the services that compose them
//! into the resolution API.
pub mod ports;
pub mod services;
