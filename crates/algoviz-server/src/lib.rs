//! Algoviz Steps Server
//!
//! HTTP transport for the step engine: validates job descriptions, optionally
//! forwards them to a remote engine, and falls back to the local generators.
//!
//! # Architecture
//!
//! - **Request**: Parses and validates `/api/steps` bodies into a [`Job`]
//! - **Remote**: Delegates a job to a remote engine with the same contract
//! - **Server**: Axum router (`/api/steps`, `/api/algorithms`, `/health`)
//! - **Config**: Environment-driven [`ServerConfig`]
//!
//! # Usage
//!
//! ```no_run
//! use algoviz_server::{ServerConfig, StepsServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let server = StepsServer::new(&config)?;
//!     server.serve(config.addr).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod remote;
pub mod request;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, Error, Result};
pub use remote::RemoteEngine;
pub use request::{Job, MAX_ARRAY_LEN, MIN_ARRAY_LEN};
pub use server::StepsServer;
