use crate::domain::model::{Credentials, Order, OrderStatus, Session};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the session token survives between invocations.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn session_file(&self) -> Option<&str>;
}

/// The remote order API. Authentication and status transitions live server-side.
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session>;
    async fn all_orders(&self, session: &Session) -> Result<Vec<Order>>;
    async fn order(&self, session: &Session, id: i64) -> Result<Order>;
    async fn update_status(&self, session: &Session, id: i64, status: &OrderStatus) -> Result<()>;
    async fn delete_order(&self, session: &Session, id: i64) -> Result<()>;
}
