//! ship-note-client - typed client for the ship-note release-notes service
//!
//! This library wraps the service's `POST /api/generate` endpoint: build a
//! [`GenerateRequest`] describing a repository and a ref range, send it with
//! [`ReleaseNoteClient::generate`], and read the drafted notes out of the
//! returned [`ReleaseNoteResponse`].
//!
//! ```no_run
//! use ship_note_client::{ClientConfig, GenerateRequest, ReleaseNoteClient};
//!
//! # async fn run() -> Result<(), ship_note_client::ShipNoteError> {
//! let config = ClientConfig::default();
//! let client = ReleaseNoteClient::new(&config)?;
//!
//! let request = GenerateRequest::new(
//!     "alex-builds-source/ship-note",
//!     "standard",
//!     "internal",
//!     true,
//!     "v0.1.10",
//!     "v0.1.11",
//! );
//!
//! let response = client.generate(&request).await?;
//! println!("{}", response.schema_version()?);
//! println!("{}", response.what_shipped()?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod request;
pub mod response;

// Re-export the core types for easier use
pub use client::ReleaseNoteClient;
pub use config::ClientConfig;
pub use error::ShipNoteError;
pub use request::{DEFAULT_TARGET_REF, GenerateRequest, KNOWN_DESTINATIONS, KNOWN_PRESETS};
pub use response::{ReleaseNoteResponse, extract_field};
