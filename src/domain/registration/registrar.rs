//! Registrar - the speaker registration workflow.
//!
//! Runs four screening stages in strict order and, only when all of them
//! pass, delegates persistence to the speaker store. Any stage failure
//! aborts the remaining stages; nothing is ever partially persisted.
//!
//! Stage order:
//! 1. Identity validation (first name, last name, email present)
//! 2. Qualification gate (seniority signals vs. disqualifiers)
//! 3. Session approval (per-session obsolete-technology screening)
//! 4. Fee calculation (experience band lookup)

use crate::domain::foundation::SpeakerId;
use crate::domain::registration::{FeeBand, RegistrationError, ScreeningPolicy};
use crate::domain::speaker::{BrowserName, Speaker};
use crate::ports::SpeakerRepository;

/// Internet Explorer versions below this disqualify the candidate.
const MIN_INTERNET_EXPLORER_VERSION: u32 = 9;

/// Experience must exceed this to count as a seniority signal on its own.
const EXPERIENCE_SIGNAL_THRESHOLD: u32 = 10;

/// The registration workflow.
///
/// Owns the screening policy and is otherwise stateless; one `Registrar`
/// can screen any number of speakers.
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    policy: ScreeningPolicy,
}

impl Registrar {
    /// Creates a registrar that screens against the given policy.
    pub fn new(policy: ScreeningPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy this registrar screens against.
    pub fn policy(&self) -> &ScreeningPolicy {
        &self.policy
    }

    /// Registers a speaker for the conference.
    ///
    /// Runs the four screening stages in order, then saves the speaker
    /// through `repository` and returns the allocated identifier. The store
    /// is called exactly once, and only after every stage has passed.
    ///
    /// On success the speaker carries its computed `registration_fee` and
    /// every proposed session carries a definite `approved` verdict.
    ///
    /// # Errors
    ///
    /// - `MissingField` - first name, last name, or email is blank
    /// - `NotQualified` - the qualification gate rejected the candidate
    /// - `NoSessions` - the candidate proposed no sessions
    /// - `Persistence` - the store failed; wraps the store's error
    pub async fn register(
        &self,
        speaker: &mut Speaker,
        repository: &dyn SpeakerRepository,
    ) -> Result<SpeakerId, RegistrationError> {
        Self::validate_identity(speaker)?;

        if !self.is_qualified(speaker) {
            return Err(RegistrationError::NotQualified);
        }

        self.approve_sessions(speaker)?;

        speaker.registration_fee = Some(FeeBand::for_experience(speaker.years_experience).fee());

        let id = repository.save_speaker(speaker).await?;
        Ok(id)
    }

    /// Stage 1: the three identity fields must be present. Checks stop at
    /// the first blank field, in declaration order.
    fn validate_identity(speaker: &Speaker) -> Result<(), RegistrationError> {
        if speaker.first_name.trim().is_empty() {
            return Err(RegistrationError::missing_field("first_name"));
        }
        if speaker.last_name.trim().is_empty() {
            return Err(RegistrationError::missing_field("last_name"));
        }
        if speaker.email.trim().is_empty() {
            return Err(RegistrationError::missing_field("email"));
        }
        Ok(())
    }

    /// Stage 2: at least one seniority signal, and no disqualifier.
    fn is_qualified(&self, speaker: &Speaker) -> bool {
        self.has_seniority_signal(speaker) && !self.is_disqualified(speaker)
    }

    fn has_seniority_signal(&self, speaker: &Speaker) -> bool {
        speaker
            .years_experience
            .map(|years| years > EXPERIENCE_SIGNAL_THRESHOLD)
            .unwrap_or(false)
            || speaker.has_blog
            || speaker.certifications.len() >= self.policy.required_certifications
            || self.policy.is_approved_employer(&speaker.employer)
    }

    fn is_disqualified(&self, speaker: &Speaker) -> bool {
        self.policy.is_blocked_domain(speaker.email_domain())
            || (speaker.browser.name == BrowserName::InternetExplorer
                && speaker.browser.major_version < MIN_INTERNET_EXPLORER_VERSION)
    }

    /// Stage 3: every session gets a definite verdict. A session mentioning
    /// an obsolete technology in its title or description is disapproved;
    /// the rest are approved. There is no aggregate gate on the outcome: a
    /// speaker whose sessions were all disapproved still registers.
    fn approve_sessions(&self, speaker: &mut Speaker) -> Result<(), RegistrationError> {
        if speaker.sessions.is_empty() {
            return Err(RegistrationError::NoSessions);
        }

        for session in &mut speaker.sessions {
            let obsolete = self.policy.mentions_obsolete_technology(&session.title)
                || self.policy.mentions_obsolete_technology(&session.description);
            session.approved = Some(!obsolete);
        }

        Ok(())
    }
}
