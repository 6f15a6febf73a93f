pub mod error;
pub mod logger;
#[cfg(feature = "cli")]
pub mod prompt;
pub mod validation;
