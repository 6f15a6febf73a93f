pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{http::ApiClient, session::FileSessionStore};
pub use crate::config::Settings;
pub use crate::core::{dashboard::Dashboard, orders::OrderBook, social::extract_social_references};
pub use crate::utils::error::{AdminError, Result};
