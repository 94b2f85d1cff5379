use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::image::{self, ImageFormat, ImageQuality};
use super::price::Pricing;
use super::set::SetBrief;
use super::sub::{Ability, Attack, Booster, CardVariants, Legal, PokemonCardItem, WeakRes};
use super::timestamp;
use crate::error::DecodeError;

// ---------------------------------------------------------------------------
// CardCategory — the discriminator carried in every card payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardCategory {
    Pokemon,
    Trainer,
    Energy,
}

impl CardCategory {
    /// Wire value of the `category` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardCategory::Pokemon => "Pokemon",
            CardCategory::Trainer => "Trainer",
            CardCategory::Energy => "Energy",
        }
    }

    /// Exact, case-sensitive match on the wire value.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Pokemon" => Some(CardCategory::Pokemon),
            "Trainer" => Some(CardCategory::Trainer),
            "Energy" => Some(CardCategory::Energy),
            _ => None,
        }
    }

    /// Resolve the raw `category` value of a payload.
    ///
    /// Absent, `null`, non-string and unrecognised values all fail with
    /// [`DecodeError::UnknownCardCategory`].
    pub fn resolve(raw: Option<&Value>) -> Result<Self, DecodeError> {
        match raw {
            None | Some(Value::Null) => Err(DecodeError::UnknownCardCategory { found: None }),
            Some(Value::String(s)) => {
                Self::from_wire(s).ok_or_else(|| DecodeError::UnknownCardCategory {
                    found: Some(s.clone()),
                })
            }
            Some(other) => Err(DecodeError::UnknownCardCategory {
                found: Some(other.to_string()),
            }),
        }
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CardBrief — lightweight card summary (card list, set contents)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBrief {
    pub id: String,
    pub local_id: String,
    pub name: String,
    pub image: Option<String>,
}

impl CardBrief {
    pub fn image_url(&self, quality: ImageQuality, format: ImageFormat) -> Option<String> {
        self.image
            .as_deref()
            .map(|base| image::card_image_url(base, quality, format))
    }
}

// ---------------------------------------------------------------------------
// CardInfo — fields every card category carries
// ---------------------------------------------------------------------------

/// Read access to the fields shared by all card categories.
///
/// Implemented by each variant payload and by [`Card`], which delegates to
/// whichever variant it holds.
pub trait CardInfo {
    /// Globally unique id, `<set id>-<local id>`.
    fn id(&self) -> &str;
    /// Number of the card within its set.
    fn local_id(&self) -> &str;
    fn name(&self) -> &str;
    fn image(&self) -> Option<&str>;
    fn category(&self) -> CardCategory;
    fn illustrator(&self) -> Option<&str>;
    fn rarity(&self) -> Option<&str>;
    fn set(&self) -> &SetBrief;
    fn variants(&self) -> &CardVariants;
    fn boosters(&self) -> Option<&[Booster]>;
    fn pricing(&self) -> Option<&Pricing>;
    fn updated(&self) -> DateTime<Utc>;
    fn legal(&self) -> &Legal;

    fn image_url(&self, quality: ImageQuality, format: ImageFormat) -> Option<String> {
        self.image()
            .map(|base| image::card_image_url(base, quality, format))
    }

    fn brief(&self) -> CardBrief {
        CardBrief {
            id: self.id().to_string(),
            local_id: self.local_id().to_string(),
            name: self.name().to_string(),
            image: self.image().map(str::to_string),
        }
    }
}

macro_rules! impl_card_info {
    ($ty:ty, $category:expr) => {
        impl CardInfo for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn local_id(&self) -> &str {
                &self.local_id
            }
            fn name(&self) -> &str {
                &self.name
            }
            fn image(&self) -> Option<&str> {
                self.image.as_deref()
            }
            fn category(&self) -> CardCategory {
                $category
            }
            fn illustrator(&self) -> Option<&str> {
                self.illustrator.as_deref()
            }
            fn rarity(&self) -> Option<&str> {
                self.rarity.as_deref()
            }
            fn set(&self) -> &SetBrief {
                &self.set
            }
            fn variants(&self) -> &CardVariants {
                &self.variants
            }
            fn boosters(&self) -> Option<&[Booster]> {
                self.boosters.as_deref()
            }
            fn pricing(&self) -> Option<&Pricing> {
                self.pricing.as_ref()
            }
            fn updated(&self) -> DateTime<Utc> {
                self.updated
            }
            fn legal(&self) -> &Legal {
                &self.legal
            }
        }
    };
}

// ---------------------------------------------------------------------------
// PokemonCard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonCard {
    // -- common card fields --
    pub id: String,
    pub local_id: String,
    pub name: String,
    pub image: Option<String>,
    pub illustrator: Option<String>,
    pub rarity: Option<String>,
    pub set: SetBrief,
    pub variants: CardVariants,
    pub boosters: Option<Vec<Booster>>,
    pub pricing: Option<Pricing>,
    #[serde(with = "timestamp")]
    pub updated: DateTime<Utc>,
    pub legal: Legal,

    // -- Pokémon-specific fields --
    pub dex_id: Option<Vec<u32>>,
    pub hp: Option<u32>,
    pub types: Option<Vec<String>>,
    pub evolve_from: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub stage: Option<String>,
    pub suffix: Option<String>,
    pub item: Option<PokemonCardItem>,
    pub abilities: Option<Vec<Ability>>,
    pub attacks: Option<Vec<Attack>>,
    pub weaknesses: Option<Vec<WeakRes>>,
    pub resistances: Option<Vec<WeakRes>>,
    pub retreat: Option<u32>,
    pub regulation_mark: Option<String>,
}

impl_card_info!(PokemonCard, CardCategory::Pokemon);

// ---------------------------------------------------------------------------
// TrainerCard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerCard {
    // -- common card fields --
    pub id: String,
    pub local_id: String,
    pub name: String,
    pub image: Option<String>,
    pub illustrator: Option<String>,
    pub rarity: Option<String>,
    pub set: SetBrief,
    pub variants: CardVariants,
    pub boosters: Option<Vec<Booster>>,
    pub pricing: Option<Pricing>,
    #[serde(with = "timestamp")]
    pub updated: DateTime<Utc>,
    pub legal: Legal,

    // -- Trainer-specific fields --
    pub effect: String,
    pub trainer_type: Option<String>,
    pub regulation_mark: Option<String>,
}

impl_card_info!(TrainerCard, CardCategory::Trainer);

// ---------------------------------------------------------------------------
// EnergyCard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCard {
    // -- common card fields --
    pub id: String,
    pub local_id: String,
    pub name: String,
    pub image: Option<String>,
    pub illustrator: Option<String>,
    pub rarity: Option<String>,
    pub set: SetBrief,
    pub variants: CardVariants,
    pub boosters: Option<Vec<Booster>>,
    pub pricing: Option<Pricing>,
    #[serde(with = "timestamp")]
    pub updated: DateTime<Utc>,
    pub legal: Legal,

    // -- Energy-specific fields --
    pub effect: Option<String>,
    pub energy_type: String,
    pub regulation_mark: Option<String>,
}

impl_card_info!(EnergyCard, CardCategory::Energy);

// ---------------------------------------------------------------------------
// Card — a fully decoded card of any category
// ---------------------------------------------------------------------------

/// A single card, resolved from the `category` discriminator of its payload.
///
/// Serializes back to the wire shape, `category` included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category")]
pub enum Card {
    Pokemon(PokemonCard),
    Trainer(TrainerCard),
    Energy(EnergyCard),
}

impl Card {
    /// Resolve an already-parsed payload: read `category`, then decode the
    /// whole object against the matching variant.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let category = CardCategory::resolve(value.get("category"))?;
        log::trace!("resolved card category {}", category);
        Ok(Self::deserialize_as(category, value)?)
    }

    /// Decode a whole card payload against the variant `category` selects.
    pub(crate) fn deserialize_as<'de, D>(category: CardCategory, deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match category {
            CardCategory::Pokemon => PokemonCard::deserialize(deserializer).map(Card::Pokemon),
            CardCategory::Trainer => TrainerCard::deserialize(deserializer).map(Card::Trainer),
            CardCategory::Energy => EnergyCard::deserialize(deserializer).map(Card::Energy),
        }
    }

    pub fn as_pokemon(&self) -> Option<&PokemonCard> {
        match self {
            Card::Pokemon(card) => Some(card),
            _ => None,
        }
    }

    pub fn as_trainer(&self) -> Option<&TrainerCard> {
        match self {
            Card::Trainer(card) => Some(card),
            _ => None,
        }
    }

    pub fn as_energy(&self) -> Option<&EnergyCard> {
        match self {
            Card::Energy(card) => Some(card),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn CardInfo {
        match self {
            Card::Pokemon(card) => card as &dyn CardInfo,
            Card::Trainer(card) => card as &dyn CardInfo,
            Card::Energy(card) => card as &dyn CardInfo,
        }
    }
}

impl CardInfo for Card {
    fn id(&self) -> &str {
        self.inner().id()
    }
    fn local_id(&self) -> &str {
        self.inner().local_id()
    }
    fn name(&self) -> &str {
        self.inner().name()
    }
    fn image(&self) -> Option<&str> {
        self.inner().image()
    }
    fn category(&self) -> CardCategory {
        self.inner().category()
    }
    fn illustrator(&self) -> Option<&str> {
        self.inner().illustrator()
    }
    fn rarity(&self) -> Option<&str> {
        self.inner().rarity()
    }
    fn set(&self) -> &SetBrief {
        self.inner().set()
    }
    fn variants(&self) -> &CardVariants {
        self.inner().variants()
    }
    fn boosters(&self) -> Option<&[Booster]> {
        self.inner().boosters()
    }
    fn pricing(&self) -> Option<&Pricing> {
        self.inner().pricing()
    }
    fn updated(&self) -> DateTime<Utc> {
        self.inner().updated()
    }
    fn legal(&self) -> &Legal {
        self.inner().legal()
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Card::from_value(value).map_err(de::Error::custom)
    }
}
