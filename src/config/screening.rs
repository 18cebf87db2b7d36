//! Screening list configuration.

use serde::Deserialize;

use crate::domain::registration::ScreeningPolicy;

use super::ConfigValidationError;

/// Screening lists as loaded from the environment.
///
/// Every field falls back to the canonical default list, so an empty
/// environment yields the standard policy. Overrides replace a list
/// wholesale; there is no append semantics.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningSettings {
    /// Employers whose staff qualify on employment alone.
    #[serde(default = "default_approved_employers")]
    pub approved_employers: Vec<String>,

    /// Email domains that disqualify a candidate outright.
    #[serde(default = "default_blocked_email_domains")]
    pub blocked_email_domains: Vec<String>,

    /// Terms that mark a session as covering an obsolete technology.
    #[serde(default = "default_obsolete_technologies")]
    pub obsolete_technologies: Vec<String>,

    /// Minimum certification count for the certification seniority signal.
    #[serde(default = "default_required_certifications")]
    pub required_certifications: usize,
}

fn default_approved_employers() -> Vec<String> {
    ScreeningPolicy::default()
        .approved_employers
        .into_iter()
        .collect()
}

fn default_blocked_email_domains() -> Vec<String> {
    ScreeningPolicy::default()
        .blocked_email_domains
        .into_iter()
        .collect()
}

fn default_obsolete_technologies() -> Vec<String> {
    ScreeningPolicy::default().obsolete_technologies
}

fn default_required_certifications() -> usize {
    ScreeningPolicy::default().required_certifications
}

impl Default for ScreeningSettings {
    fn default() -> Self {
        Self {
            approved_employers: default_approved_employers(),
            blocked_email_domains: default_blocked_email_domains(),
            obsolete_technologies: default_obsolete_technologies(),
            required_certifications: default_required_certifications(),
        }
    }
}

impl ScreeningSettings {
    /// Builds the domain policy these settings describe.
    pub fn policy(&self) -> ScreeningPolicy {
        ScreeningPolicy {
            approved_employers: self.approved_employers.iter().cloned().collect(),
            blocked_email_domains: self.blocked_email_domains.iter().cloned().collect(),
            obsolete_technologies: self.obsolete_technologies.clone(),
            required_certifications: self.required_certifications,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.required_certifications == 0 {
            return Err(ConfigValidationError::InvalidCertificationRequirement);
        }
        Ok(())
    }
}
