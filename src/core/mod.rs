pub mod dashboard;
pub mod orders;
pub mod social;

pub use crate::domain::model::{Order, OrderStatus, Platform, Session, SocialReference};
pub use crate::domain::ports::{ConfigProvider, OrderApi, SessionStore};
pub use crate::utils::error::Result;
