//! Proposed conference session.

use serde::{Deserialize, Serialize};

/// A session a speaker proposes to present.
///
/// Pure data holder. `approved` stays `None` until the registration
/// workflow's session-approval stage runs; afterwards every session in the
/// speaker's list carries a definite verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session title as submitted.
    pub title: String,
    /// Abstract describing the session content.
    pub description: String,
    /// Approval verdict. `None` = not yet evaluated.
    pub approved: Option<bool>,
}

impl Session {
    /// Creates a new, not-yet-evaluated session.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            approved: None,
        }
    }

    /// Returns true once the approval stage has approved this session.
    pub fn is_approved(&self) -> bool {
        self.approved == Some(true)
    }
}
