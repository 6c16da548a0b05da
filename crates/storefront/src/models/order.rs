//! Orders and their checkout input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maison_bonheur_core::{OrderId, OrderStatus, Price, ProductId};

use super::CartItem;

/// A placed order.
///
/// Orders are snapshots: items are copied out of the cart and keep no link
/// back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// When the order was created.
    pub date: DateTime<Utc>,
    /// Amount charged, as supplied by checkout (shipping included).
    pub total: Price,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub shipping_method: String,
}

impl Order {
    /// Total number of units across all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// A line of an order, copied by value from a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image_url: Some(item.image_url.clone()),
        }
    }
}

/// Delivery contact and address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

impl ShippingAddress {
    /// An empty address with only the country filled in.
    #[must_use]
    pub fn for_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}

/// Caller-supplied data for a new order.
///
/// Every field is optional; the order store fills in defaults for what is
/// missing.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub total: Option<Price>,
    pub items: Vec<OrderItem>,
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: Option<String>,
    pub shipping_method: Option<String>,
}
