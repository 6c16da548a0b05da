//! Records served by the JSON catalog API.
//!
//! The stores never mutate these; they are read to populate product pickers
//! and converted into cart or wishlist entries.

use serde::{Deserialize, Serialize};

use maison_bonheur_core::{CategoryId, PerfumeId, Price, ReviewId, UserId};

/// A catalog perfume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perfume {
    pub id: PerfumeId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
    pub brand: String,
    pub category_id: CategoryId,
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub is_featured: bool,
    pub intensity: String,
    pub season: String,
    pub mood: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// A customer review of a perfume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub perfume_id: PerfumeId,
    pub user_id: UserId,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
    pub created_at: String,
}
