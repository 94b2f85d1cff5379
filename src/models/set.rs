use serde::{Deserialize, Serialize};

use super::card::CardBrief;
use super::image::{self, ImageFormat};
use super::serie::SerieBrief;
use super::sub::Legal;

// ---------------------------------------------------------------------------
// SetBrief — summary of a set (set list endpoint, card/serie back-references)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBrief {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub symbol: Option<String>,
    pub card_count: SetBriefCardCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SetBriefCardCount {
    pub total: u32,
    pub official: u32,
}

impl SetBrief {
    pub fn logo_url(&self, format: ImageFormat) -> Option<String> {
        self.logo.as_deref().map(|base| image::asset_url(base, format))
    }

    pub fn symbol_url(&self, format: ImageFormat) -> Option<String> {
        self.symbol.as_deref().map(|base| image::asset_url(base, format))
    }
}

// ---------------------------------------------------------------------------
// Set — full set including its card list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub symbol: Option<String>,
    pub release_date: String,
    pub card_count: SetCardCount,
    pub cards: Vec<CardBrief>,
    pub legal: Legal,
    pub serie: SerieBrief,
}

/// Card count breakdown of a full set.
///
/// `official` is the number printed on the cards; `total` also counts
/// secret rares. The finish sub-counts overlap (a card with a normal and a
/// reverse print is counted in both).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetCardCount {
    pub total: u32,
    pub official: u32,
    pub normal: u32,
    pub reverse: u32,
    pub holo: u32,
    pub first_ed: u32,
}

impl SetCardCount {
    /// `official <= total`, and no finish sub-count exceeds `total`.
    ///
    /// Not enforced at decode time; upstream data is taken as-is.
    pub fn is_consistent(&self) -> bool {
        self.official <= self.total
            && [self.normal, self.reverse, self.holo, self.first_ed]
                .iter()
                .all(|&n| n <= self.total)
    }
}

impl Set {
    pub fn logo_url(&self, format: ImageFormat) -> Option<String> {
        self.logo.as_deref().map(|base| image::asset_url(base, format))
    }

    pub fn symbol_url(&self, format: ImageFormat) -> Option<String> {
        self.symbol.as_deref().map(|base| image::asset_url(base, format))
    }

    /// Look up a card of this set by its number within the set.
    pub fn card_by_local_id(&self, local_id: &str) -> Option<&CardBrief> {
        self.cards.iter().find(|c| c.local_id == local_id)
    }

    /// Project the full set down to the brief shape used in listings.
    pub fn brief(&self) -> SetBrief {
        SetBrief {
            id: self.id.clone(),
            name: self.name.clone(),
            logo: self.logo.clone(),
            symbol: self.symbol.clone(),
            card_count: SetBriefCardCount {
                total: self.card_count.total,
                official: self.card_count.official,
            },
        }
    }
}
