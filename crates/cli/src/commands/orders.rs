//! Order history commands.

use clap::Subcommand;
use tracing::{info, warn};

use maison_bonheur_core::OrderId;
use maison_bonheur_storefront::models::Order;
use maison_bonheur_storefront::{AppError, Storefront};

#[derive(Subcommand)]
pub enum OrdersAction {
    /// List orders, most recent first
    List,
    /// Show one order with its lines
    Show { id: String },
    /// Order count and amount spent
    Stats,
}

pub fn run(shop: &Storefront, action: OrdersAction) -> Result<(), AppError> {
    let orders = shop.orders();
    match action {
        OrdersAction::List => {
            let listed = orders.list_orders();
            if listed.is_empty() {
                warn!("No orders yet");
            }
            for order in &listed {
                log_order(order);
            }
        }
        OrdersAction::Show { id } => {
            let order = orders
                .get_order_by_id(&OrderId::from(id.as_str()))
                .ok_or(AppError::NotFound(id))?;
            log_order(order);
            for item in &order.items {
                info!(
                    id = %item.id,
                    name = %item.name,
                    price = %item.price,
                    quantity = item.quantity,
                    "Order line"
                );
            }
            let address = &order.shipping_address;
            info!(
                full_name = %address.full_name,
                address = %address.address,
                city = %address.city,
                postal_code = %address.postal_code,
                country = %address.country,
                "Shipping address"
            );
        }
        OrdersAction::Stats => {
            info!(
                orders = orders.order_count(),
                spent = %orders.total_spent(),
                "Order history"
            );
        }
    }
    Ok(())
}

fn log_order(order: &Order) {
    info!(
        id = %order.id,
        date = %order.date.format("%Y-%m-%d %H:%M"),
        status = %order.status,
        items = order.item_count(),
        total = %order.total,
        shipping = %order.shipping_method,
        payment = %order.payment_method,
        "Order"
    );
}
