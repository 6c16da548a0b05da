//! Status and method enums for orders.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Price;

/// Order lifecycle status.
///
/// Orders placed through checkout start as [`OrderStatus::Confirmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    #[default]
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    /// All shipping methods, in display order.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    /// Wire name stored on orders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Livraison Standard",
            Self::Express => "Livraison Express",
        }
    }

    /// Flat shipping cost.
    #[must_use]
    pub fn cost(self) -> Price {
        match self {
            Self::Standard => Price::from_units(7),
            Self::Express => Price::from_units(15),
        }
    }

    /// Expected delivery window.
    #[must_use]
    pub const fn delivery_window(self) -> &'static str {
        match self {
            Self::Standard => "3-5 jours",
            Self::Express => "1-2 jours",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            _ => Err(format!("invalid shipping method: {s}")),
        }
    }
}

/// Payment options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    OnDelivery,
}

impl PaymentMethod {
    /// Wire name stored on orders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Paypal => "paypal",
            Self::OnDelivery => "on_delivery",
        }
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Carte de crédit",
            Self::Paypal => "PayPal",
            Self::OnDelivery => "Paiement à la livraison",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "paypal" => Ok(Self::Paypal),
            "on_delivery" => Ok(Self::OnDelivery),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_confirmed() {
        assert_eq!(OrderStatus::default(), OrderStatus::Confirmed);
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let parsed: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
    }

    #[test]
    fn test_shipping_costs() {
        assert_eq!(ShippingMethod::Standard.cost(), Price::from_units(7));
        assert_eq!(ShippingMethod::Express.cost(), Price::from_units(15));
    }

    #[test]
    fn test_method_round_trip_through_str() {
        for method in ShippingMethod::ALL {
            assert_eq!(method.as_str().parse::<ShippingMethod>().unwrap(), method);
        }
        assert_eq!(
            "on_delivery".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::OnDelivery
        );
        assert!("cash".parse::<PaymentMethod>().is_err());
    }
}
