//! Cart line items.

use serde::{Deserialize, Serialize};

use maison_bonheur_core::{Price, ProductId};

/// A line in the shopping cart.
///
/// Lines are unique by `id`. `quantity` is expected to be at least 1, but only
/// callers enforce that; see [`crate::stores::CartStore::set_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price.
    pub price: Price,
    pub image_url: String,
    pub quantity: u32,
    /// Present when the line is a custom creation from the perfume creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<BlendDetails>,
}

impl CartItem {
    /// Create a catalog line.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: image_url.into(),
            quantity,
            custom: None,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Composition details carried by a custom creation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendDetails {
    /// Note names, in selection order.
    pub notes: Vec<String>,
    pub season: String,
    pub mood: String,
    /// Rounded average note intensity.
    pub intensity: u8,
    pub description: String,
}
