//! clock-service - reports the host's local time of day over HTTP
//!
//! - `GET /time` answers with the current local time as `HH:MM:SS`
//! - `GET /health` answers with a small liveness document

pub mod api;
pub mod clock;
pub mod config;
pub mod error;

pub use error::{Error, Result};
