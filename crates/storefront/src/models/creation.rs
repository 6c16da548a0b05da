//! Custom perfume creations.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maison_bonheur_core::{Price, ProductId};

use super::cart::{BlendDetails, CartItem};

/// Image shown for every custom creation.
pub const CREATION_IMAGE: &str = "assets/images/custom-perfume.jpg";

/// Olfactory family of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteFamily {
    Floral,
    #[serde(rename = "Boisé")]
    Woody,
    #[serde(rename = "Fruité")]
    Fruity,
    Gourmand,
    #[serde(rename = "Frais")]
    Fresh,
    Oriental,
}

impl NoteFamily {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Floral => "Floral",
            Self::Woody => "Boisé",
            Self::Fruity => "Fruité",
            Self::Gourmand => "Gourmand",
            Self::Fresh => "Frais",
            Self::Oriental => "Oriental",
        }
    }
}

impl fmt::Display for NoteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A note the customer can pick in the creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub name: String,
    pub family: NoteFamily,
    /// Strength on a 1-10 scale.
    pub intensity: u8,
    pub description: String,
    /// Unit price; notes without one are charged a flat rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

/// Season a blend suits best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "Printemps")]
    Spring,
    #[serde(rename = "Été")]
    Summer,
    #[serde(rename = "Automne")]
    Autumn,
    #[serde(rename = "Hiver")]
    Winter,
    #[serde(rename = "Toutes saisons")]
    AllSeasons,
}

impl Season {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Printemps",
            Self::Summer => "Été",
            Self::Autumn => "Automne",
            Self::Winter => "Hiver",
            Self::AllSeasons => "Toutes saisons",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character of a blend, derived from its average intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "Intense & Sensuel")]
    Intense,
    #[serde(rename = "Élégant & Sophistiqué")]
    Elegant,
    #[serde(rename = "Romantique & Doux")]
    Romantic,
    #[serde(rename = "Frais & Léger")]
    Light,
}

impl Mood {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intense => "Intense & Sensuel",
            Self::Elegant => "Élégant & Sophistiqué",
            Self::Romantic => "Romantique & Doux",
            Self::Light => "Frais & Léger",
        }
    }

    /// First word of the label ("Intense", "Élégant", ...).
    #[must_use]
    pub fn keyword(self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A composed custom perfume.
///
/// Stored with snake_case field names, like the catalog records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creation {
    pub id: ProductId,
    pub created_at: DateTime<Utc>,
    /// Note names, in selection order.
    pub notes: Vec<String>,
    /// Distinct families, in first-seen order.
    pub families: Vec<NoteFamily>,
    /// Rounded average intensity.
    pub intensity: u8,
    pub season: Season,
    pub mood: Mood,
    pub name: String,
    pub price: Price,
    pub image_url: String,
    pub description: String,
}

impl Creation {
    /// A single-unit cart line carrying the blend details.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            quantity: 1,
            custom: Some(BlendDetails {
                notes: self.notes.clone(),
                season: self.season.label().to_owned(),
                mood: self.mood.label().to_owned(),
                intensity: self.intensity,
                description: self.description.clone(),
            }),
        }
    }
}
