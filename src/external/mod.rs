//! Clients for external services.

pub mod client;
pub mod media;

pub use media::MediaClient;
