//! Web browser identification.
//!
//! Part of the candidate's submitted profile. Only the browser family and
//! major version matter to the workflow, and only inside one disqualifying
//! rule of the qualification gate.

use serde::{Deserialize, Serialize};

/// Browser family reported in a candidate's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserName {
    Unknown,
    InternetExplorer,
    Firefox,
    Chrome,
    Opera,
    Safari,
    Dolphin,
    Konqueror,
    Lynx,
}

impl BrowserName {
    /// Returns the display name for this browser family.
    pub fn label(&self) -> &'static str {
        match self {
            BrowserName::Unknown => "Unknown",
            BrowserName::InternetExplorer => "Internet Explorer",
            BrowserName::Firefox => "Firefox",
            BrowserName::Chrome => "Chrome",
            BrowserName::Opera => "Opera",
            BrowserName::Safari => "Safari",
            BrowserName::Dolphin => "Dolphin",
            BrowserName::Konqueror => "Konqueror",
            BrowserName::Lynx => "Lynx",
        }
    }
}

impl std::fmt::Display for BrowserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The web browser a candidate registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebBrowser {
    /// Browser family.
    pub name: BrowserName,
    /// Major version number, e.g. 9 for "9.0.8112".
    pub major_version: u32,
}

impl WebBrowser {
    /// Creates a browser identification.
    pub fn new(name: BrowserName, major_version: u32) -> Self {
        Self {
            name,
            major_version,
        }
    }
}
