//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SpeakerRepository` - persistence of fully-screened speakers

mod speaker_repository;

pub use speaker_repository::{RepositoryError, SpeakerRepository};
