//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//!
//! - `repository` - speaker store implementations

pub mod repository;

pub use repository::InMemorySpeakerRepository;
