//! Price display policy.

use serde::Serialize;

/// Label shown for templates that cost nothing.
pub const FREE_LABEL: &str = "Free";

/// Currency code appended to paid prices.
pub const CURRENCY: &str = "USD";

/// How a template price is presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceDisplay {
    Free,
    Paid {
        amount: f64,
        currency: &'static str,
    },
}

impl PriceDisplay {
    /// Absent, zero, negative and non-finite prices are all free.
    pub fn from_price(price: Option<f64>) -> Self {
        match price {
            Some(amount) if amount.is_finite() && amount > 0.0 => PriceDisplay::Paid {
                amount,
                currency: CURRENCY,
            },
            _ => PriceDisplay::Free,
        }
    }

    /// `Free`, or `$<amount> USD`.
    pub fn label(&self) -> String {
        match self {
            PriceDisplay::Free => FREE_LABEL.to_string(),
            PriceDisplay::Paid { amount, currency } => format!("${amount} {currency}"),
        }
    }

    /// Call-to-action text for the purchase button.
    pub fn purchase_label(&self) -> String {
        match self {
            PriceDisplay::Free => "Purchase for $0".to_string(),
            PriceDisplay::Paid { amount, .. } => format!("Purchase for ${amount}"),
        }
    }
}
