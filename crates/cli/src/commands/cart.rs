//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! mb-cli cart add --id p1 --name "Rose Absolue" --price 120 --image rose.jpg -q 2
//! mb-cli cart set-quantity p1 3
//! mb-cli cart list
//! ```

use clap::Subcommand;
use tracing::info;

use maison_bonheur_core::{Price, ProductId};
use maison_bonheur_storefront::Storefront;
use maison_bonheur_storefront::models::CartItem;

#[derive(Subcommand)]
pub enum CartAction {
    /// Show cart lines and totals
    List,
    /// Add a product, merging with an existing line
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        /// Unit price in dinars
        #[arg(long)]
        price: Price,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line
    Remove { id: String },
    /// Overwrite a line's quantity
    SetQuantity { id: String, quantity: u32 },
    /// Empty the cart
    Clear,
}

pub fn run(shop: &mut Storefront, action: CartAction) {
    match action {
        CartAction::List => list(shop),
        CartAction::Add {
            id,
            name,
            price,
            image,
            quantity,
        } => {
            shop.cart_mut()
                .add_item(CartItem::new(id, name, price, image, quantity));
            list(shop);
        }
        CartAction::Remove { id } => {
            shop.cart_mut().remove_item(&ProductId::new(id));
            list(shop);
        }
        CartAction::SetQuantity { id, quantity } => {
            shop.cart_mut().set_quantity(&ProductId::new(id), quantity);
            list(shop);
        }
        CartAction::Clear => {
            shop.cart_mut().clear();
            info!("Cart cleared");
        }
    }
}

fn list(shop: &Storefront) {
    let cart = shop.cart();
    for item in cart.items() {
        info!(
            id = %item.id,
            name = %item.name,
            price = %item.price,
            quantity = item.quantity,
            line_total = %item.line_total(),
            custom = item.custom.is_some(),
            "Cart line"
        );
    }
    info!(
        lines = cart.len(),
        items = cart.total_item_count(),
        total = %cart.total_price(),
        "Cart"
    );
}
