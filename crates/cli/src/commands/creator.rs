//! Perfume creator commands.
//!
//! # Usage
//!
//! ```bash
//! mb-cli creator palette --family Boisé
//! mb-cli creator compose Rose Santal Vanille --add-to-cart
//! ```

use chrono::Utc;
use clap::Subcommand;
use tracing::{info, warn};

use maison_bonheur_storefront::models::Note;
use maison_bonheur_storefront::services::creator::{
    Composer, ToggleOutcome, filter_by_family, note_palette,
};
use maison_bonheur_storefront::{AppError, Storefront};

#[derive(Subcommand)]
pub enum CreatorAction {
    /// List available notes
    Palette {
        /// Only notes of this family (e.g. Floral, Boisé)
        #[arg(long)]
        family: Option<String>,
    },
    /// Compose a perfume from up to five notes
    Compose {
        /// Note names, in order of importance
        #[arg(required = true)]
        notes: Vec<String>,
        /// Save the creation and add it to the cart
        #[arg(long)]
        add_to_cart: bool,
    },
    /// List saved creations
    Saved,
}

pub fn run(shop: &mut Storefront, action: CreatorAction) -> Result<(), AppError> {
    let palette = note_palette();
    match action {
        CreatorAction::Palette { family } => {
            let family = match family {
                Some(label) => Some(
                    palette
                        .iter()
                        .map(|note| note.family)
                        .find(|family| family.label().eq_ignore_ascii_case(&label))
                        .ok_or_else(|| AppError::BadRequest(format!("unknown family: {label}")))?,
                ),
                None => None,
            };
            for note in filter_by_family(&palette, family) {
                info!(
                    name = %note.name,
                    family = %note.family,
                    intensity = note.intensity,
                    price = ?note.price.map(|p| p.to_string()),
                    "{}",
                    note.description
                );
            }
        }
        CreatorAction::Compose { notes, add_to_cart } => {
            let mut composer = Composer::new();
            for name in &notes {
                let note = find_note(&palette, name)?;
                if composer.toggle(note) == ToggleOutcome::LimitReached {
                    warn!(note = %note.name, "Blend is full, note skipped");
                }
            }

            let creation = composer.compose(Utc::now(), &mut rand::rng())?;
            info!(
                name = %creation.name,
                season = %creation.season,
                mood = %creation.mood,
                intensity = creation.intensity,
                price = %creation.price,
                "{}",
                creation.description
            );
            if add_to_cart {
                shop.add_creation_to_cart(creation);
                info!(total = %shop.cart().total_price(), "Added to cart");
            }
        }
        CreatorAction::Saved => {
            for creation in shop.creations().items() {
                info!(
                    id = %creation.id,
                    name = %creation.name,
                    notes = %creation.notes.join(", "),
                    price = %creation.price,
                    "Creation"
                );
            }
        }
    }
    Ok(())
}

fn find_note<'a>(palette: &'a [Note], name: &str) -> Result<&'a Note, AppError> {
    palette
        .iter()
        .find(|note| note.name.to_lowercase() == name.to_lowercase())
        .ok_or_else(|| AppError::BadRequest(format!("unknown note: {name}")))
}
