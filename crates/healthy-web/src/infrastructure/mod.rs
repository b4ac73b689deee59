//! Infrastructure layer for healthy-web.
//!
//! - `http_client` – [`PatientApi`](crate::application::PatientApi) backed by
//!   `reqwest`.
//! - `memory_page` – [`Page`](crate::application::Page) held in memory, used by
//!   the command-line client and by tests.
//! - `config_file` – loading and saving [`ClientConfig`](crate::domain::ClientConfig)
//!   as TOML.

pub mod config_file;
pub mod http_client;
pub mod memory_page;

pub use config_file::{load_config, save_config, validate, ConfigError};
pub use http_client::HttpPatientApi;
pub use memory_page::{Element, MemoryPage};
