use crate::domain::model::{ApiEnvelope, Credentials, Order, OrderStatus, Session, StatusUpdate};
use crate::domain::ports::{ConfigProvider, OrderApi};
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api-laamsa-form.vercel.app";

/// reqwest-backed client for the order API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_url(), Duration::from_secs(config.timeout_seconds()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        request
            .bearer_auth(&session.token)
            .header("Content-Type", "application/json")
    }

    /// Sends an authenticated request; 401 maps to [`AdminError::Unauthorized`].
    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<ApiEnvelope> {
        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!("API response status: {}", response.status());
            return Err(AdminError::Unauthorized);
        }
        Self::decode(response, fallback).await
    }

    /// Decodes the `{ success, ... }` envelope.
    ///
    /// `success: false` maps to [`AdminError::ApiRejected`] with the server
    /// message, or `fallback` when the server gave none.
    async fn decode(response: Response, fallback: &str) -> Result<ApiEnvelope> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        let envelope: ApiEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(AdminError::HttpStatus {
                    status: status.as_u16(),
                })
            }
            Err(e) => return Err(AdminError::SerializationError(e)),
        };

        if !envelope.success {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            tracing::warn!("API rejected request: {}", message);
            return Err(AdminError::ApiRejected { message });
        }

        Ok(envelope)
    }
}

#[async_trait]
impl OrderApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        tracing::debug!("POST {}/ as {}", self.base_url, credentials.username);
        let request = self
            .client
            .post(self.url("/"))
            .header("Content-Type", "application/json")
            .json(credentials);

        // 401 here means bad credentials, not an expired session.
        let response = request.send().await?;
        let envelope = Self::decode(response, "Identifiants incorrects").await?;

        let token = envelope.token.ok_or_else(|| AdminError::ApiRejected {
            message: "Réponse de connexion sans jeton".to_string(),
        })?;
        let username = envelope
            .user
            .map(|u| u.username)
            .unwrap_or_else(|| credentials.username.clone());

        Ok(Session { token, username })
    }

    async fn all_orders(&self, session: &Session) -> Result<Vec<Order>> {
        let request = self.authorized(self.client.get(self.url("/admin/allorders")), session);
        let envelope = self
            .send(request, "Erreur lors du chargement des commandes")
            .await?;
        Ok(envelope.orders.unwrap_or_default())
    }

    async fn order(&self, session: &Session, id: i64) -> Result<Order> {
        let request = self.authorized(
            self.client.get(self.url(&format!("/admin/order/{}", id))),
            session,
        );
        match self.send(request, "Commande introuvable").await {
            Ok(envelope) => envelope.order.ok_or(AdminError::OrderNotFound { id }),
            Err(AdminError::ApiRejected { .. }) => Err(AdminError::OrderNotFound { id }),
            Err(e) => Err(e),
        }
    }

    async fn update_status(&self, session: &Session, id: i64, status: &OrderStatus) -> Result<()> {
        let body = StatusUpdate {
            statut: status.clone(),
        };
        let request = self
            .authorized(
                self.client
                    .put(self.url(&format!("/admin/order/{}/status", id))),
                session,
            )
            .json(&body);
        self.send(request, "Erreur lors de la mise à jour").await?;
        Ok(())
    }

    async fn delete_order(&self, session: &Session, id: i64) -> Result<()> {
        let request = self.authorized(
            self.client.delete(self.url(&format!("/admin/order/{}", id))),
            session,
        );
        self.send(request, "Erreur lors de la suppression").await?;
        Ok(())
    }
}
