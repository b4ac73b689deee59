//! Domain layer for healthy-web.
//!
//! Holds the client configuration.  Reading it from disk or the command line is
//! the job of the outer layers.

pub mod config;

pub use config::ClientConfig;
