use serde::{Deserialize, Serialize};

use crate::price::PriceInput;

/// A provider's metered endpoint as listed on the marketplace. Owned by the
/// parent view; components only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOffer {
    pub moniker: String,
    pub endpoint: String,
    pub price_usd: f64,
    pub discount_percent: u8,
}

/// Parent-owned payment gating for one offer. Components never mutate this;
/// they emit intents and the parent applies them here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    pub enabled: bool,
    pub price_usd: f64,
}

impl PaymentConfig {
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Apply a price intent. Returns false when the input fails validation;
    /// the stored price stays put so re-enabling keeps the old value.
    pub fn set_price(&mut self, input: PriceInput) -> bool {
        match input.accept() {
            Some(value) => {
                self.price_usd = value;
                true
            }
            None => false,
        }
    }
}
