//! Speaker domain module.
//!
//! The passive data holders that feed the registration workflow: a
//! candidate's professional profile and the sessions they propose to
//! present. No behavior lives here beyond field access; every rule belongs
//! to the `registration` module.
//!
//! # Module Structure
//!
//! - `browser` - Web browser identification used by the qualification gate
//! - `session` - Proposed conference session
//! - `speaker` - Speaker profile

mod browser;
mod session;
mod speaker;

pub use browser::{BrowserName, WebBrowser};
pub use session::Session;
pub use speaker::Speaker;
