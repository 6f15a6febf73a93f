use crate::domain::model::{Order, OrderStatus};
use serde::Serialize;

/// Which statuses the table shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn accepts(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => &order.statut == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse::<OrderStatus>().map(StatusFilter::Only)
        }
    }
}

/// Per-status counters shown above the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub en_attente: usize,
    pub confirmee: usize,
    pub livree: usize,
    pub annulee: usize,
}

impl OrderStats {
    pub fn get(&self, status: &OrderStatus) -> usize {
        match status {
            OrderStatus::EnAttente => self.en_attente,
            OrderStatus::Confirmee => self.confirmee,
            OrderStatus::Livree => self.livree,
            OrderStatus::Annulee => self.annulee,
            OrderStatus::Unknown(_) => 0,
        }
    }
}

/// The loaded order list plus the active status filter.
///
/// Search is always applied on top of the status filter, and statistics are
/// always computed over the full list.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    filter: StatusFilter,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            filter: StatusFilter::All,
        }
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, id: i64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id_commande == id)
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &StatusFilter {
        &self.filter
    }

    pub fn filtered(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| self.filter.accepts(o)).collect()
    }

    /// Case-insensitive search over name, phone, commune, wilaya and id.
    pub fn search(&self, query: &str) -> Vec<&Order> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.filtered();
        }

        self.orders
            .iter()
            .filter(|o| self.filter.accepts(o))
            .filter(|o| matches_query(o, &query))
            .collect()
    }

    pub fn stats(&self) -> OrderStats {
        let mut stats = OrderStats::default();
        for order in &self.orders {
            match order.statut {
                OrderStatus::EnAttente => stats.en_attente += 1,
                OrderStatus::Confirmee => stats.confirmee += 1,
                OrderStatus::Livree => stats.livree += 1,
                OrderStatus::Annulee => stats.annulee += 1,
                OrderStatus::Unknown(_) => {}
            }
        }
        stats
    }
}

fn matches_query(order: &Order, query: &str) -> bool {
    order.nom.to_lowercase().contains(query)
        || order.telephone.contains(query)
        || order.commune.to_lowercase().contains(query)
        || order.wilaya.to_lowercase().contains(query)
        || order.id_commande.to_string().contains(query)
}

/// "0 commandes", "1 commande", "12 commandes".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 commande".to_string()
    } else {
        format!("{} commandes", count)
    }
}
