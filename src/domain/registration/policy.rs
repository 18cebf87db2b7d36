//! Screening policy - the injected allow/deny lists.
//!
//! The workflow never hard-codes its lists. A `ScreeningPolicy` is built
//! from configuration (or `default()`) and handed to the `Registrar`, so
//! tests and deployments can substitute lists without touching workflow
//! logic. All matching is exact and case-sensitive.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Employers whose staff qualify on employment alone.
const APPROVED_EMPLOYERS: &[&str] = &["Microsoft", "Google", "Fog Creek Software", "37Signals"];

/// Email domains that disqualify a candidate outright.
const BLOCKED_EMAIL_DOMAINS: &[&str] = &["aol.com", "hotmail.com", "prodigy.com", "CompuServe.com"];

/// Terms that mark a proposed session as covering an obsolete technology.
const OBSOLETE_TECHNOLOGIES: &[&str] = &["Cobol", "Punch Cards", "Commodore", "VBScript"];

/// Certifications needed to qualify on certification count alone.
const REQUIRED_CERTIFICATIONS: usize = 3;

static DEFAULT_POLICY: Lazy<ScreeningPolicy> = Lazy::new(|| ScreeningPolicy {
    approved_employers: APPROVED_EMPLOYERS.iter().map(|s| s.to_string()).collect(),
    blocked_email_domains: BLOCKED_EMAIL_DOMAINS.iter().map(|s| s.to_string()).collect(),
    obsolete_technologies: OBSOLETE_TECHNOLOGIES.iter().map(|s| s.to_string()).collect(),
    required_certifications: REQUIRED_CERTIFICATIONS,
});

/// The allow/deny lists consulted by the registration workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningPolicy {
    /// Employers on the seniority allow-list (exact match).
    pub approved_employers: HashSet<String>,
    /// Email domains on the deny-list, matched against the part of the
    /// address after the last `@`.
    pub blocked_email_domains: HashSet<String>,
    /// Substrings that mark a session title or description as obsolete.
    pub obsolete_technologies: Vec<String>,
    /// Minimum certification count for the certification seniority signal.
    pub required_certifications: usize,
}

impl ScreeningPolicy {
    /// Returns true when the employer is on the allow-list.
    pub fn is_approved_employer(&self, employer: &str) -> bool {
        self.approved_employers.contains(employer)
    }

    /// Returns true when the email domain is on the deny-list.
    pub fn is_blocked_domain(&self, domain: &str) -> bool {
        self.blocked_email_domains.contains(domain)
    }

    /// Returns true when the text mentions any obsolete technology as a
    /// case-sensitive substring.
    pub fn mentions_obsolete_technology(&self, text: &str) -> bool {
        self.obsolete_technologies
            .iter()
            .any(|tech| text.contains(tech.as_str()))
    }
}

impl Default for ScreeningPolicy {
    fn default() -> Self {
        DEFAULT_POLICY.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_carries_the_canonical_lists() {
        let policy = ScreeningPolicy::default();
        assert_eq!(policy.approved_employers.len(), 4);
        assert_eq!(policy.blocked_email_domains.len(), 4);
        assert_eq!(policy.obsolete_technologies.len(), 4);
        assert_eq!(policy.required_certifications, 3);
    }

    #[test]
    fn employer_match_is_case_sensitive() {
        let policy = ScreeningPolicy::default();
        assert!(policy.is_approved_employer("Google"));
        assert!(policy.is_approved_employer("Fog Creek Software"));
        assert!(!policy.is_approved_employer("google"));
        assert!(!policy.is_approved_employer("Initech"));
    }

    #[test]
    fn domain_match_is_case_sensitive() {
        let policy = ScreeningPolicy::default();
        assert!(policy.is_blocked_domain("hotmail.com"));
        assert!(policy.is_blocked_domain("CompuServe.com"));
        assert!(!policy.is_blocked_domain("compuserve.com"));
        assert!(!policy.is_blocked_domain("example.com"));
    }

    #[test]
    fn obsolete_technologies_match_as_substrings() {
        let policy = ScreeningPolicy::default();
        assert!(policy.mentions_obsolete_technology("The Cobol Renaissance"));
        assert!(policy.mentions_obsolete_technology("Scripting with VBScript today"));
        assert!(!policy.mentions_obsolete_technology("cobol in lowercase"));
        assert!(!policy.mentions_obsolete_technology("Modern systems programming"));
    }
}
