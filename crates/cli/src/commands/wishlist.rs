//! Wishlist commands.

use clap::Subcommand;
use tracing::info;

use maison_bonheur_core::{PerfumeId, Price};
use maison_bonheur_storefront::Storefront;
use maison_bonheur_storefront::models::WishlistItem;

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Show favorites
    List,
    /// Add a perfume (duplicates are ignored)
    Add {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Price,
        #[arg(long)]
        image: Option<String>,
    },
    /// Add if absent, remove if present
    Toggle {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Price,
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a perfume
    Remove { id: i64 },
    /// Remove everything
    Clear,
}

pub fn run(shop: &mut Storefront, action: WishlistAction) {
    match action {
        WishlistAction::List => {}
        WishlistAction::Add {
            id,
            name,
            price,
            image,
        } => shop.wishlist_mut().add(WishlistItem {
            id: PerfumeId::new(id),
            name,
            price,
            image_url: image,
        }),
        WishlistAction::Toggle {
            id,
            name,
            price,
            image,
        } => {
            let added = shop.wishlist_mut().toggle(WishlistItem {
                id: PerfumeId::new(id),
                name,
                price,
                image_url: image,
            });
            info!(id, added, "Wishlist toggled");
        }
        WishlistAction::Remove { id } => shop.wishlist_mut().remove(PerfumeId::new(id)),
        WishlistAction::Clear => shop.wishlist_mut().clear(),
    }

    let wishlist = shop.wishlist();
    for item in wishlist.items() {
        info!(id = %item.id, name = %item.name, price = %item.price, "Favorite");
    }
    info!(count = wishlist.count(), "Wishlist");
}
