use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order as stored by the API.
///
/// Unknown values are kept verbatim so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    EnAttente,
    Confirmee,
    Livree,
    Annulee,
    Unknown(String),
}

impl OrderStatus {
    pub const KNOWN: [OrderStatus; 4] = [
        OrderStatus::EnAttente,
        OrderStatus::Confirmee,
        OrderStatus::Livree,
        OrderStatus::Annulee,
    ];

    /// Wire value, e.g. `EN_ATTENTE`.
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::EnAttente => "EN_ATTENTE",
            OrderStatus::Confirmee => "CONFIRMEE",
            OrderStatus::Livree => "LIVREE",
            OrderStatus::Annulee => "ANNULEE",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Human label; unknown statuses fall back to the raw code.
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::EnAttente => "En Attente",
            OrderStatus::Confirmee => "Confirmée",
            OrderStatus::Livree => "Livrée",
            OrderStatus::Annulee => "Annulée",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Badge css class; unknown statuses are styled as pending.
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::EnAttente | OrderStatus::Unknown(_) => "en-attente",
            OrderStatus::Confirmee => "confirmee",
            OrderStatus::Livree => "livree",
            OrderStatus::Annulee => "annulee",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OrderStatus::Unknown(_))
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "EN_ATTENTE" => OrderStatus::EnAttente,
            "CONFIRMEE" => OrderStatus::Confirmee,
            "LIVREE" => OrderStatus::Livree,
            "ANNULEE" => OrderStatus::Annulee,
            _ => OrderStatus::Unknown(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    /// Only the four known codes are accepted from user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match OrderStatus::from(s.trim().to_uppercase()) {
            OrderStatus::Unknown(raw) => Err(format!(
                "unknown status '{}', expected one of EN_ATTENTE, CONFIRMEE, LIVREE, ANNULEE",
                raw
            )),
            status => Ok(status),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One order as returned by `/admin/allorders` and `/admin/order/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id_commande: i64,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub wilaya: String,
    #[serde(default)]
    pub wilaya_code: Option<serde_json::Value>,
    #[serde(default)]
    pub commune: String,
    #[serde(default)]
    pub nombre_cartes: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub prix_total: Option<f64>,
    #[serde(default = "missing_status", deserialize_with = "lenient_status")]
    pub statut: OrderStatus,
    #[serde(default)]
    pub date_heure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reseaux_sociaux: Option<serde_json::Value>,
    #[serde(
        default,
        rename = "reseauxSociaux",
        skip_serializing_if = "Option::is_none"
    )]
    pub reseaux_sociaux_legacy: Option<serde_json::Value>,
}

impl Order {
    /// Raw social field, coalesced over both historical field names.
    ///
    /// The first truthy value wins; a value that is not a string counts as empty.
    pub fn socials(&self) -> &str {
        [&self.reseaux_sociaux, &self.reseaux_sociaux_legacy]
            .into_iter()
            .flatten()
            .find(|v| is_truthy(v))
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    pub fn wilaya_code_display(&self) -> String {
        self.wilaya_code.as_ref().map(display_value).unwrap_or_default()
    }

    pub fn cards_display(&self) -> String {
        self.nombre_cartes.as_ref().map(display_value).unwrap_or_default()
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Renders a loosely typed JSON scalar the way it should appear in a cell.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accepts `1500`, `1500.5` or `"1500.50"`; anything unparsable becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn missing_status() -> OrderStatus {
    OrderStatus::Unknown(String::new())
}

/// `null` or a non-string status is kept as an empty unknown status.
fn lenient_status<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(raw)) => OrderStatus::from(raw),
        _ => missing_status(),
    })
}

/// Authenticated operator context, passed explicitly to every API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub statut: OrderStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub username: String,
}

/// Every endpoint answers with `{ "success": bool, ... }` plus a payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub orders: Option<Vec<Order>>,
    #[serde(default)]
    pub order: Option<Order>,
}

/// Platform a social reference was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Facebook,
    LinkedIn,
    Twitter,
    GenericLink,
    PlainText,
}

impl Platform {
    pub fn icon_class(&self) -> &'static str {
        match self {
            Platform::Instagram => "fab fa-instagram",
            Platform::Facebook => "fab fa-facebook",
            Platform::LinkedIn => "fab fa-linkedin",
            Platform::Twitter => "fab fa-twitter",
            Platform::GenericLink => "fas fa-link",
            Platform::PlainText => "fas fa-share-alt",
        }
    }
}

/// One classified entry of an order's social field.
///
/// `href` is `None` only for [`Platform::PlainText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialReference {
    pub platform: Platform,
    pub display_label: String,
    pub href: Option<String>,
}

impl SocialReference {
    pub fn link(
        platform: Platform,
        display_label: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            display_label: display_label.into(),
            href: Some(href.into()),
        }
    }

    pub fn plain_text(display_label: impl Into<String>) -> Self {
        Self {
            platform: Platform::PlainText,
            display_label: display_label.into(),
            href: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json() -> serde_json::Value {
        json!({
            "id_commande": 42,
            "nom": "Amine",
            "telephone": "0555123456",
            "wilaya": "Alger",
            "wilaya_code": 16,
            "commune": "Bab Ezzouar",
            "nombre_cartes": 3,
            "prix_total": "4500.00",
            "statut": "CONFIRMEE",
            "date_heure": "2024-01-15T10:30:00Z",
            "reseaux_sociaux": "@amine.dz"
        })
    }

    #[test]
    fn test_order_deserializes_lenient_fields() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        assert_eq!(order.id_commande, 42);
        assert_eq!(order.prix_total, Some(4500.0));
        assert_eq!(order.statut, OrderStatus::Confirmee);
        assert_eq!(order.wilaya_code_display(), "16");
        assert_eq!(order.cards_display(), "3");
        assert_eq!(order.socials(), "@amine.dz");
    }

    #[test]
    fn test_socials_falls_back_to_legacy_name() {
        let mut value = order_json();
        value["reseaux_sociaux"] = json!("");
        value["reseauxSociaux"] = json!("Facebook: fb.com/amine");
        let order: Order = serde_json::from_value(value).unwrap();
        assert_eq!(order.socials(), "Facebook: fb.com/amine");
    }

    #[test]
    fn test_non_string_socials_count_as_empty() {
        let mut value = order_json();
        value["reseaux_sociaux"] = json!(12);
        value["reseauxSociaux"] = json!("@ignored");
        let order: Order = serde_json::from_value(value).unwrap();
        assert_eq!(order.socials(), "");
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = OrderStatus::from("EN_COURS".to_string());
        assert_eq!(status.label(), "EN_COURS");
        assert_eq!(status.css_class(), "en-attente");
        assert!("en_cours".parse::<OrderStatus>().is_err());
        assert_eq!("livree".parse::<OrderStatus>().unwrap(), OrderStatus::Livree);
    }

    #[test]
    fn test_null_or_missing_status_keeps_the_list() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "success": true,
            "orders": [
                { "id_commande": 1, "statut": "LIVREE" },
                { "id_commande": 2, "statut": null },
                { "id_commande": 3 }
            ]
        }))
        .unwrap();
        let orders = envelope.orders.unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].statut, OrderStatus::Livree);
        for order in &orders[1..] {
            assert_eq!(order.statut, OrderStatus::Unknown(String::new()));
            assert_eq!(order.statut.css_class(), "en-attente");
            assert!(!order.statut.is_known());
        }
    }

    #[test]
    fn test_status_update_serializes_wire_code() {
        let body = serde_json::to_value(StatusUpdate {
            statut: OrderStatus::Annulee,
        })
        .unwrap();
        assert_eq!(body, json!({ "statut": "ANNULEE" }));
    }
}
