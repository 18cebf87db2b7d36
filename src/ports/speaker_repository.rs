//! Speaker repository port.
//!
//! Defines the contract for persisting a fully-screened speaker. The
//! registration workflow calls `save_speaker` exactly once per successful
//! registration, after every screening stage has passed; a speaker that
//! failed any stage never reaches the store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SpeakerId;
use crate::domain::speaker::Speaker;

/// Errors raised by speaker store implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The store refused the record.
    #[error("speaker store rejected the record: {0}")]
    Rejected(String),

    /// The store could not be reached or failed mid-operation.
    #[error("speaker store unavailable: {0}")]
    Unavailable(String),

    /// The store completed the save but produced no identifier.
    /// Implementations must raise this rather than invent an identifier.
    #[error("speaker store did not allocate an identifier")]
    IdentifierNotAllocated,
}

/// Repository port for speaker registration persistence.
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// Persists a screened speaker and returns the allocated identifier.
    ///
    /// The speaker is borrowed, not consumed: ownership stays with the
    /// registering caller.
    ///
    /// # Errors
    ///
    /// Any `RepositoryError`. The workflow wraps it in
    /// `RegistrationError::Persistence`, so callers can tell infrastructure
    /// failures apart from rule rejections.
    async fn save_speaker(&self, speaker: &Speaker) -> Result<SpeakerId, RepositoryError>;
}
