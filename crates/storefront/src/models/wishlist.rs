//! Wishlist entries.

use serde::{Deserialize, Serialize};

use maison_bonheur_core::{PerfumeId, Price};

use super::Perfume;

/// A favorited catalog perfume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: PerfumeId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Perfume> for WishlistItem {
    fn from(perfume: &Perfume) -> Self {
        Self {
            id: perfume.id,
            name: perfume.name.clone(),
            price: perfume.price,
            image_url: Some(perfume.image_url.clone()),
        }
    }
}
