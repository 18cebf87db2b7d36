//! Speaker profile.

use serde::{Deserialize, Serialize};

use super::{Session, WebBrowser};

/// A conference speaker candidate.
///
/// Constructed by the caller with raw profile data. The registration
/// workflow mutates it in place: `registration_fee` is written when the fee
/// stage succeeds, and each session's `approved` flag is written by the
/// approval stage. Ownership stays with the caller throughout; the speaker
/// store only ever sees a borrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Years of professional experience. Absent is not the same as zero:
    /// an unknown history falls into the zero-fee band.
    pub years_experience: Option<u32>,
    pub has_blog: bool,
    /// Informational only; never validated by the workflow.
    pub blog_url: Option<String>,
    pub browser: WebBrowser,
    /// Certification names. Only the count participates in screening.
    pub certifications: Vec<String>,
    pub employer: String,
    /// Computed by the fee stage; `None` until registration reaches it.
    pub registration_fee: Option<u32>,
    /// Sessions the candidate proposes to present. Must be non-empty to
    /// register.
    pub sessions: Vec<Session>,
}

impl Speaker {
    /// Returns the domain portion of the email address: the text after the
    /// last `@`, or the whole address when it contains none.
    pub fn email_domain(&self) -> &str {
        self.email.rsplit('@').next().unwrap_or(&self.email)
    }
}
