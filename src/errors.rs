//! Error hierarchy for the telemetry simulator.
//!
//! Configuration problems are fatal at startup; publish problems are
//! transient and contained at the broadcast tick boundary. An empty region
//! catalog is not an error anywhere in the crate, it surfaces as `None`.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pub/sub transport failures, recoverable per tick
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// Unrecoverable failures requiring process termination
    #[error("Fatal error: {0}")]
    Fatal(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The broadcast channel can no longer accept messages
    #[error("broadcast channel closed: {0}")]
    ChannelClosed(String),
}
