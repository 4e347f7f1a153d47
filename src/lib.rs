// src/lib.rs
pub mod commander;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use commander::{Commander, CopyPolicy, Platform};
pub use config::BrowserConfig;
pub use error::{BrowseError, Result};
pub use session::{BrowserSession, MenuOption, SessionOptions, SessionState};
