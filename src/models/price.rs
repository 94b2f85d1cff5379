use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

// ---------------------------------------------------------------------------
// Pricing — market snapshots attached to a card
// ---------------------------------------------------------------------------

/// Market prices from the two upstream sources. Either may be missing when
/// the source has no listing for the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Pricing {
    pub tcgplayer: Option<TcgPlayerPricing>,
    pub cardmarket: Option<CardMarketPricing>,
}

// ---------------------------------------------------------------------------
// TCGplayer — per-finish buckets (USD)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcgPlayerPricing {
    #[serde(with = "timestamp")]
    pub updated: DateTime<Utc>,
    pub unit: String,
    pub normal: Option<TcgPlayerPricingVariant>,
    pub holofoil: Option<TcgPlayerPricingVariant>,
    #[serde(rename = "reverse-holofoil")]
    pub reverse_holofoil: Option<TcgPlayerPricingVariant>,
    #[serde(rename = "1st-edition")]
    pub first_edition: Option<TcgPlayerPricingVariant>,
    #[serde(rename = "1st-edition-holofoil")]
    pub first_edition_holofoil: Option<TcgPlayerPricingVariant>,
    pub unlimited: Option<TcgPlayerPricingVariant>,
    #[serde(rename = "unlimited-holofoil")]
    pub unlimited_holofoil: Option<TcgPlayerPricingVariant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayerPricingVariant {
    pub low_price: Option<f64>,
    pub mid_price: Option<f64>,
    pub high_price: Option<f64>,
    pub market_price: Option<f64>,
    pub direct_low_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// Cardmarket — trend and rolling averages (EUR)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarketPricing {
    #[serde(with = "timestamp")]
    pub updated: DateTime<Utc>,
    pub unit: String,
    pub id_product: Option<u64>,

    // -- normal finish --
    pub avg: Option<f64>,
    pub low: Option<f64>,
    pub trend: Option<f64>,
    pub avg1: Option<f64>,
    pub avg7: Option<f64>,
    pub avg30: Option<f64>,

    // -- holo finish --
    #[serde(rename = "avg-holo")]
    pub avg_holo: Option<f64>,
    #[serde(rename = "low-holo")]
    pub low_holo: Option<f64>,
    #[serde(rename = "trend-holo")]
    pub trend_holo: Option<f64>,
    #[serde(rename = "avg1-holo")]
    pub avg1_holo: Option<f64>,
    #[serde(rename = "avg7-holo")]
    pub avg7_holo: Option<f64>,
    #[serde(rename = "avg30-holo")]
    pub avg30_holo: Option<f64>,
}

impl CardMarketPricing {
    /// Whether the source reported any holo statistics at all.
    pub fn has_holo(&self) -> bool {
        [
            self.avg_holo,
            self.low_holo,
            self.trend_holo,
            self.avg1_holo,
            self.avg7_holo,
            self.avg30_holo,
        ]
        .iter()
        .any(Option::is_some)
    }
}
