//! # Framework Errors
//!
//! Errors raised by the collection actor layer itself. Domain clients map these into
//! their own error types; a lookup miss is not one of them, since `find` reports it
//! as `None`.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Append rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
