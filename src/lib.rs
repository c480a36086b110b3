//! Typed Rust client for the ServerChan push-notification HTTP API.
//!
//! ServerChan delivers a titled message to a channel identified by an opaque
//! send key. This crate wraps the single `.send` round trip with a domain
//! layer of strong types, a transport layer for the wire-format quirks of the
//! service (form-encoded request, JSON-or-HTML response), and a small client
//! layer that classifies outcomes and drives a pluggable logging policy.
//!
//! ```rust,no_run
//! use serverchan::{LeveledLogger, LogLevel, ServerChanClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), serverchan::ServerChanError> {
//!     let mut client = ServerChanClient::new();
//!     client.set_logger(LeveledLogger::new(LogLevel::ErrorsOnly));
//!     client
//!         .send("SCU...", "deploy finished", "all hosts healthy")
//!         .await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod logger;
mod transport;

pub use client::{
    ServerChanClient, ServerChanClientBuilder, ServerChanError, UnexpectedHttpStatus,
};
pub use domain::{
    ERRMSG_BAD_PUSH_TOKEN, ERRMSG_DUPLICATE, ERRNO_LOCAL, ERRNO_SUCCESS, MessageBody,
    MessageTitle, PushReply, ReplyKind, SendKey, ValidationError,
};
pub use logger::{LeveledLogger, LogEvent, LogLevel, PushLogger, SilentLogger, mask};
