//! Application layer - orchestration around the domain workflow.
//!
//! - `registration_service` - wires the Registrar to a speaker store and
//!   carries the crate's observability

mod registration_service;

pub use registration_service::RegistrationService;
