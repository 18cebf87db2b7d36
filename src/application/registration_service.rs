//! Registration service - application-level entry point.
//!
//! Wraps the domain `Registrar` with a shared repository handle and emits
//! the crate's observability events. The domain workflow itself stays
//! silent; reporting what happened is this layer's job.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::foundation::SpeakerId;
use crate::domain::registration::{Registrar, RegistrationError};
use crate::domain::speaker::Speaker;
use crate::ports::SpeakerRepository;

/// Application service for speaker registration.
pub struct RegistrationService {
    registrar: Registrar,
    repository: Arc<dyn SpeakerRepository>,
}

impl RegistrationService {
    /// Creates a service around the given registrar and store.
    pub fn new(registrar: Registrar, repository: Arc<dyn SpeakerRepository>) -> Self {
        Self {
            registrar,
            repository,
        }
    }

    /// Registers a speaker, logging the outcome.
    ///
    /// Delegates to [`Registrar::register`]; see there for stage order and
    /// error semantics.
    pub async fn register(&self, speaker: &mut Speaker) -> Result<SpeakerId, RegistrationError> {
        match self
            .registrar
            .register(speaker, self.repository.as_ref())
            .await
        {
            Ok(id) => {
                info!(
                    speaker_id = %id,
                    email = %speaker.email,
                    fee = speaker.registration_fee,
                    "speaker registered"
                );
                Ok(id)
            }
            Err(err) if err.is_rule_violation() => {
                warn!(email = %speaker.email, %err, "speaker rejected by screening rules");
                Err(err)
            }
            Err(err) => {
                error!(email = %speaker.email, %err, "speaker registration failed to persist");
                Err(err)
            }
        }
    }
}
