//! Checkout: turning the cart into a placed order.
//!
//! Placing an order touches two stores in sequence (create the order, then
//! clear the cart). The steps are not transactional.

use thiserror::Error;
use tracing::{info, instrument};

use maison_bonheur_core::{PaymentMethod, Price, ShippingMethod};

use crate::models::{Order, OrderDraft, OrderItem, ShippingAddress};
use crate::services::auth::AccountStore;
use crate::stores::{CartStore, OrderStore};

/// Reasons checkout refuses to place an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Amounts shown on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub subtotal: Price,
    pub shipping_cost: Price,
    pub total: Price,
    pub item_count: u32,
}

/// Customer choices submitted with the checkout form.
#[derive(Debug, Clone, Default)]
pub struct CheckoutRequest {
    pub shipping_address: ShippingAddress,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
}

/// Compute the checkout amounts for the current cart.
#[must_use]
pub fn summarize(cart: &CartStore, shipping: ShippingMethod) -> CheckoutSummary {
    let subtotal = cart.total_price();
    let shipping_cost = shipping.cost();
    CheckoutSummary {
        subtotal,
        shipping_cost,
        total: subtotal + shipping_cost,
        item_count: cart.total_item_count(),
    }
}

/// Shipping address pre-filled from the logged-in customer, or an empty
/// address in `default_country`.
#[must_use]
pub fn prefill_address(accounts: &AccountStore, default_country: &str) -> ShippingAddress {
    let mut address = ShippingAddress::for_country(default_country);
    if let Some(user) = accounts.current_user() {
        address.full_name = user.full_name();
        address.address = user.address;
        address.email = user.email.as_str().to_owned();
        address.phone = user.phone.unwrap_or_default();
    }
    address
}

/// Place an order for the cart contents and empty the cart.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if the cart has no lines.
#[instrument(skip_all, fields(shipping = %request.shipping_method, payment = %request.payment_method))]
pub fn place_order(
    cart: &mut CartStore,
    orders: &mut OrderStore,
    request: CheckoutRequest,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let summary = summarize(cart, request.shipping_method);
    let draft = OrderDraft {
        total: Some(summary.total),
        items: cart.items().iter().map(OrderItem::from).collect(),
        shipping_address: Some(request.shipping_address),
        payment_method: Some(request.payment_method.as_str().to_owned()),
        shipping_method: Some(request.shipping_method.as_str().to_owned()),
    };

    let order = orders.create_order(draft);
    cart.clear();

    info!(order_id = %order.id, total = %order.total, "Checkout complete");
    Ok(order)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use secrecy::SecretString;

    use super::*;
    use crate::models::{CartItem, NewAccount};
    use crate::storage::MemoryStorage;

    fn stores() -> (CartStore, OrderStore) {
        let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
        (
            CartStore::load(storage.clone()),
            OrderStore::load(storage),
        )
    }

    #[test]
    fn test_summary_adds_shipping() {
        let (mut cart, _) = stores();
        cart.add_item(CartItem::new("p1", "Rose", Price::from_units(50), "rose.jpg", 2));

        let standard = summarize(&cart, ShippingMethod::Standard);
        assert_eq!(standard.subtotal, Price::from_units(100));
        assert_eq!(standard.total, Price::from_units(107));
        assert_eq!(standard.item_count, 2);

        let express = summarize(&cart, ShippingMethod::Express);
        assert_eq!(express.total, Price::from_units(115));
    }

    #[test]
    fn test_place_order_snapshots_and_clears_cart() {
        let (mut cart, mut orders) = stores();
        cart.add_item(CartItem::new("p1", "Rose", Price::from_units(50), "rose.jpg", 2));
        cart.add_item(CartItem::new("p2", "Santal", Price::from_units(30), "santal.jpg", 1));

        let request = CheckoutRequest {
            shipping_method: ShippingMethod::Express,
            payment_method: PaymentMethod::OnDelivery,
            ..CheckoutRequest::default()
        };
        let order = place_order(&mut cart, &mut orders, request).unwrap();

        assert_eq!(order.total, Price::from_units(145));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.shipping_method, "express");
        assert_eq!(order.payment_method, "on_delivery");
        assert!(cart.is_empty());
        assert_eq!(orders.order_count(), 1);
    }

    #[test]
    fn test_empty_cart_refused() {
        let (mut cart, mut orders) = stores();
        let result = place_order(&mut cart, &mut orders, CheckoutRequest::default());
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        assert_eq!(orders.order_count(), 0);
    }

    #[test]
    fn test_prefill_from_session() {
        let storage = Arc::new(MemoryStorage::new());
        let mut accounts = AccountStore::load(storage);

        let anonymous = prefill_address(&accounts, "Tunisie");
        assert!(anonymous.full_name.is_empty());
        assert_eq!(anonymous.country, "Tunisie");

        accounts
            .register(NewAccount {
                first_name: "Sami".to_string(),
                last_name: "Haddad".to_string(),
                email: "sami@maison.tn".to_string(),
                address: "3 rue de Marseille, Tunis".to_string(),
                phone: None,
                password: SecretString::from("ambre-musc".to_string()),
            })
            .unwrap();
        accounts
            .login("sami@maison.tn", &SecretString::from("ambre-musc".to_string()))
            .unwrap();

        let address = prefill_address(&accounts, "Tunisie");
        assert_eq!(address.full_name, "Sami Haddad");
        assert_eq!(address.email, "sami@maison.tn");
        assert_eq!(address.address, "3 rue de Marseille, Tunis");
        assert!(address.phone.is_empty());
    }
}
