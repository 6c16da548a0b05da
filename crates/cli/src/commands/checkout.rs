//! Checkout commands.
//!
//! # Usage
//!
//! ```bash
//! mb-cli checkout summary --shipping express
//! mb-cli checkout place --shipping standard --payment on_delivery --city Tunis
//! ```

use clap::{Args, Subcommand};
use tracing::info;

use maison_bonheur_core::{PaymentMethod, ShippingMethod};
use maison_bonheur_storefront::services::checkout::CheckoutRequest;
use maison_bonheur_storefront::{AppError, Storefront};

#[derive(Subcommand)]
pub enum CheckoutAction {
    /// Show subtotal, shipping and total for the cart
    Summary {
        #[arg(long, default_value = "standard")]
        shipping: ShippingMethod,
    },
    /// Place an order for the cart and empty it
    Place(PlaceArgs),
}

/// Checkout form. Blank fields are pre-filled from the logged-in account.
#[derive(Args)]
pub struct PlaceArgs {
    #[arg(long, default_value = "standard")]
    shipping: ShippingMethod,
    #[arg(long, default_value = "card")]
    payment: PaymentMethod,
    #[arg(long)]
    full_name: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
}

pub fn run(shop: &mut Storefront, action: CheckoutAction) -> Result<(), AppError> {
    match action {
        CheckoutAction::Summary { shipping } => {
            let summary = shop.checkout_summary(shipping);
            info!(
                items = summary.item_count,
                subtotal = %summary.subtotal,
                shipping = %shipping.label(),
                delivery = shipping.delivery_window(),
                shipping_cost = %summary.shipping_cost,
                total = %summary.total,
                "Checkout summary"
            );
        }
        CheckoutAction::Place(args) => {
            let mut address = shop.prefill_address();
            let overrides = [
                (&mut address.full_name, args.full_name),
                (&mut address.address, args.address),
                (&mut address.city, args.city),
                (&mut address.postal_code, args.postal_code),
                (&mut address.country, args.country),
                (&mut address.phone, args.phone),
                (&mut address.email, args.email),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    *field = value;
                }
            }

            let order = shop.checkout(CheckoutRequest {
                shipping_address: address,
                shipping_method: args.shipping,
                payment_method: args.payment,
            })?;
            info!(
                id = %order.id,
                total = %order.total,
                status = %order.status,
                "Order placed"
            );
        }
    }
    Ok(())
}
