//! Order store.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use maison_bonheur_core::{OrderId, OrderStatus, PaymentMethod, Price, ShippingMethod};

use super::persisted::{PersistedList, Subscription};
use crate::models::{Order, OrderDraft, ShippingAddress};
use crate::storage::{Storage, keys};

/// Country used for the default shipping address.
pub const DEFAULT_COUNTRY: &str = "Tunisie";

/// Source of identifiers for new orders.
pub type OrderIdSource = Box<dyn FnMut() -> OrderId + Send>;

/// Placed orders, persisted oldest first under [`keys::ORDERS`].
pub struct OrderStore {
    list: PersistedList<Order>,
    next_id: OrderIdSource,
    default_country: String,
}

impl OrderStore {
    /// Load orders from storage. Bad persisted data yields no orders.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            list: PersistedList::load(storage, keys::ORDERS),
            next_id: Box::new(OrderId::generate),
            default_country: DEFAULT_COUNTRY.to_owned(),
        }
    }

    /// Replace the order id generator.
    #[must_use]
    pub fn with_id_source(mut self, source: impl FnMut() -> OrderId + Send + 'static) -> Self {
        self.next_id = Box::new(source);
        self
    }

    /// Set the country of the default shipping address.
    #[must_use]
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = country.into();
        self
    }

    /// Create, store and return a confirmed order.
    ///
    /// The draft's total is recorded as given. Missing fields default to a
    /// zero total, no items, an empty address in the default country, card
    /// payment and standard shipping.
    #[instrument(skip(self, draft), fields(items = draft.items.len()))]
    pub fn create_order(&mut self, draft: OrderDraft) -> Order {
        let order = Order {
            id: (self.next_id)(),
            date: Utc::now(),
            total: draft.total.unwrap_or(Price::ZERO),
            items: draft.items,
            status: OrderStatus::Confirmed,
            shipping_address: draft
                .shipping_address
                .unwrap_or_else(|| ShippingAddress::for_country(self.default_country.clone())),
            payment_method: draft
                .payment_method
                .unwrap_or_else(|| PaymentMethod::Card.as_str().to_owned()),
            shipping_method: draft
                .shipping_method
                .unwrap_or_else(|| ShippingMethod::Standard.as_str().to_owned()),
        };

        self.list.items_mut().push(order.clone());
        self.list.commit();

        info!(order_id = %order.id, total = %order.total, "Order created");
        order
    }

    /// Find an order by id.
    #[must_use]
    pub fn get_order_by_id(&self, id: &OrderId) -> Option<&Order> {
        self.list.items().iter().find(|order| &order.id == id)
    }

    /// All orders, most recent first.
    #[must_use]
    pub fn list_orders(&self) -> Vec<Order> {
        self.list.items().iter().rev().cloned().collect()
    }

    #[must_use]
    pub fn order_count(&self) -> usize {
        self.list.items().len()
    }

    /// Sum of recorded order totals.
    #[must_use]
    pub fn total_spent(&self) -> Price {
        self.list.items().iter().map(|order| order.total).sum()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription<Order> {
        self.list.subscribe()
    }
}
