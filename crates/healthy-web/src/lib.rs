//! healthy-web library crate.
//!
//! Drives the patient-registration page: the slide carousel, the registration
//! form submitted to the server, and the page menus.
//!
//! # Architecture
//!
//! ```text
//! UI events (click, submit)
//!         ↓
//! [healthy-web]
//!   ├── domain/           ClientConfig
//!   ├── application/      Use cases over two ports: Page and PatientApi
//!   └── infrastructure/
//!         ├── http_client/  PatientApi over reqwest
//!         ├── memory_page/  Page held in memory
//!         └── config_file/  TOML config load/save
//!         ↓
//! Registration server (JSON over HTTP)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `healthy-core` only; it sees the
//!   page and the server through traits.
//! - `infrastructure` implements those traits with `reqwest` and in-memory
//!   state, and reads the config file.

/// Domain layer: configuration types (no I/O).
pub mod domain;

/// Application layer: carousel, registration, and menu use cases.
pub mod application;

/// Infrastructure layer: HTTP client, in-memory page, config file.
pub mod infrastructure;
