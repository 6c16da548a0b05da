//! Integration tests for file-backed storage across reopens.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use maison_bonheur_core::{PerfumeId, Price};
use maison_bonheur_integration_tests::TestContext;
use maison_bonheur_storefront::models::{CartItem, NewAccount, WishlistItem};
use maison_bonheur_storefront::services::checkout::CheckoutRequest;
use maison_bonheur_storefront::services::creator::{Composer, note_palette};
use secrecy::SecretString;

#[test]
fn test_state_survives_reopen() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open(1);
        shop.cart_mut().add_item(CartItem::new(
            "p9",
            "Ambre Nuit",
            Price::from_units(210),
            "ambre.jpg",
            2,
        ));
        shop.wishlist_mut().add(WishlistItem {
            id: PerfumeId::new(4),
            name: "Jasmin de Sidi Bou".to_string(),
            price: Price::from_units(150),
            image_url: None,
        });
    }

    let shop = ctx.open(1);
    assert_eq!(shop.cart().total_item_count(), 2);
    assert_eq!(shop.cart().total_price(), Price::from_units(420));
    assert!(shop.wishlist().has(PerfumeId::new(4)));

    assert!(ctx.data_dir().join("cart_items.json").exists());
    assert!(ctx.data_dir().join("user_wishlist.json").exists());
}

#[test]
fn test_checkout_persists_order_and_empty_cart() {
    let ctx = TestContext::new();
    let order = {
        let mut shop = ctx.open(1);
        shop.cart_mut().add_item(CartItem::new(
            "p1",
            "Rose Absolue",
            Price::from_units(100),
            "rose.jpg",
            1,
        ));
        shop.checkout(CheckoutRequest::default()).unwrap()
    };

    let shop = ctx.open(2);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.orders().get_order_by_id(&order.id), Some(&order));
    assert_eq!(order.total, Price::from_units(107));
}

#[test]
fn test_corrupt_files_load_empty() {
    let ctx = TestContext::new();
    std::fs::write(ctx.data_dir().join("user_orders.json"), "[{\"id\": 12").unwrap();
    std::fs::write(ctx.data_dir().join("cart_items.json"), "null").unwrap();

    let shop = ctx.open(1);
    assert_eq!(shop.orders().order_count(), 0);
    assert!(shop.cart().is_empty());
}

#[test]
fn test_session_and_creations_survive_reopen() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open(1);
        shop.accounts_mut()
            .register(NewAccount {
                first_name: "Yassine".to_string(),
                last_name: "Mansour".to_string(),
                email: "yassine@example.tn".to_string(),
                address: "Route de la Marsa".to_string(),
                phone: None,
                password: SecretString::from("cedre-bleu".to_string()),
            })
            .unwrap();
        shop.accounts_mut()
            .login("yassine@example.tn", &SecretString::from("cedre-bleu".to_string()))
            .unwrap();

        let mut composer = Composer::new();
        for note in note_palette().iter().filter(|n| n.name == "Cèdre" || n.name == "Vanille") {
            composer.toggle(note);
        }
        let creation = composer.compose(Utc::now(), &mut rand::rng()).unwrap();
        shop.add_creation_to_cart(creation);
    }

    let shop = ctx.open(1);
    let user = shop.accounts().current_user().unwrap();
    assert_eq!(user.full_name(), "Yassine Mansour");

    let saved = shop.creations().items();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].notes, vec!["Cèdre", "Vanille"]);

    let line = shop.cart().items().first().unwrap();
    assert_eq!(line.quantity, 1);
    assert_eq!(line.custom.as_ref().unwrap().season, "Hiver");
}

#[test]
fn test_stored_cart_is_plain_json() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open(1);
        shop.cart_mut().add_item(CartItem::new(
            "p3",
            "Citron Vert",
            Price::from_units(85),
            "citron.jpg",
            3,
        ));
    }

    let raw = std::fs::read_to_string(ctx.data_dir().join("cart_items.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], "p3");
    assert_eq!(value[0]["quantity"], 3);
    assert_eq!(value[0]["price"].as_f64(), Some(85.0));
}
