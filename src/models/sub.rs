use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Legal
// ---------------------------------------------------------------------------

/// Format legality flags, shared by cards and sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Legal {
    pub standard: bool,
    pub expanded: bool,
}

// ---------------------------------------------------------------------------
// CardVariants
// ---------------------------------------------------------------------------

/// Print variants a card exists in. The flags are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardVariants {
    pub normal: bool,
    pub reverse: bool,
    pub holo: bool,
    pub first_edition: bool,
}

// ---------------------------------------------------------------------------
// Booster
// ---------------------------------------------------------------------------

/// A booster product the card can be pulled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booster {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    #[serde(rename = "artwork_front")]
    pub artwork_front: Option<String>,
    #[serde(rename = "artwork_back")]
    pub artwork_back: Option<String>,
}

// ---------------------------------------------------------------------------
// Pokémon-specific records
// ---------------------------------------------------------------------------

/// Held item printed on older Pokémon cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCardItem {
    pub name: String,
    pub effect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub cost: Vec<String>,
    pub effect: Option<String>,
    /// Kept as text: the upstream uses values like `"30+"` and `"10×"`.
    #[serde(default, deserialize_with = "damage::deserialize")]
    pub damage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(rename = "type")]
    pub type_field: String,
    pub name: String,
    pub effect: String,
}

/// One entry of a Pokémon's weaknesses or resistances, e.g. `Fire ×2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakRes {
    #[serde(rename = "type")]
    pub type_field: String,
    pub value: Option<String>,
}

mod damage {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
            Raw::Number(n) => n.to_string(),
            Raw::Text(s) => s,
        }))
    }
}
