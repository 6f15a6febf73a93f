use crate::core::orders::OrderBook;
use crate::domain::model::{Credentials, Order, OrderStatus, Session};
use crate::domain::ports::{OrderApi, SessionStore};
use crate::utils::error::{AdminError, Result};

/// Application service behind every CLI command.
///
/// Owns the current [`Session`] explicitly; a 401 from the API clears it both
/// in memory and in the store.
pub struct Dashboard<A: OrderApi, S: SessionStore> {
    api: A,
    store: S,
    session: Option<Session>,
}

impl<A: OrderApi, S: SessionStore> Dashboard<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            session: None,
        }
    }

    /// Picks up a session saved by an earlier `login`.
    pub fn resume(&mut self) -> Result<Option<&Session>> {
        self.session = self.store.load()?;
        match &self.session {
            Some(session) => tracing::debug!("Resumed session for {}", session.username),
            None => tracing::debug!("No stored session"),
        }
        Ok(self.session.as_ref())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<&Session> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let session = self.api.login(&credentials).await?;
        self.store.save(&session)?;
        tracing::info!("Logged in as {}", session.username);
        Ok(self.session.insert(session))
    }

    pub fn logout(&mut self) -> Result<()> {
        let session = self.session.take();
        self.store.clear()?;
        if let Some(session) = session {
            tracing::info!("Logged out {}", session.username);
        }
        Ok(())
    }

    pub async fn load_orders(&mut self) -> Result<OrderBook> {
        let session = self.require_session()?;
        let result = self.api.all_orders(&session).await;
        let orders = self.expire_on_unauthorized(result)?;
        tracing::info!("Loaded {} orders", orders.len());
        Ok(OrderBook::new(orders))
    }

    pub async fn order(&mut self, id: i64) -> Result<Order> {
        check_order_id(id)?;
        let session = self.require_session()?;
        let result = self.api.order(&session, id).await;
        self.expire_on_unauthorized(result)
    }

    pub async fn update_status(&mut self, id: i64, status: &OrderStatus) -> Result<()> {
        check_order_id(id)?;
        let session = self.require_session()?;
        let result = self.api.update_status(&session, id, status).await;
        self.expire_on_unauthorized(result)?;
        tracing::info!("Order #{} moved to {}", id, status);
        Ok(())
    }

    pub async fn delete_order(&mut self, id: i64) -> Result<()> {
        check_order_id(id)?;
        let session = self.require_session()?;
        let result = self.api.delete_order(&session, id).await;
        self.expire_on_unauthorized(result)?;
        tracing::info!("Order #{} deleted", id);
        Ok(())
    }

    fn require_session(&self) -> Result<Session> {
        self.session.clone().ok_or(AdminError::NotAuthenticated)
    }

    fn expire_on_unauthorized<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Err(AdminError::Unauthorized) => {
                tracing::warn!("Token rejected by the API, clearing session");
                if let Err(e) = self.logout() {
                    tracing::warn!("Failed to clear the stored session: {}", e);
                }
                Err(AdminError::SessionExpired)
            }
            other => other,
        }
    }
}

fn check_order_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(AdminError::ValidationError {
            message: format!("order id must be positive, got {}", id),
        });
    }
    Ok(())
}
