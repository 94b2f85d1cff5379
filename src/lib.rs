//! TCGdex SDK for Rust.
//!
//! Typed, read-only access to the [TCGdex](https://tcgdex.dev) Pokémon TCG
//! catalog: cards, sets and series. Card payloads are resolved into one of
//! three shapes (Pokémon, Trainer, Energy) from their `category` field.
//!
//! # Quick start
//!
//! ```no_run
//! use tcgdex_sdk::models::{Card, CardInfo};
//! use tcgdex_sdk::{Language, TcgDex};
//!
//! # async fn example() -> tcgdex_sdk::Result<()> {
//! let tcgdex = TcgDex::new();
//!
//! if let Some(Card::Pokemon(card)) = tcgdex.card("sv05-019").await? {
//!     println!("{} ({} HP)", card.name(), card.hp.unwrap_or_default());
//! }
//!
//! let japanese = TcgDex::with_language(Language::Japanese);
//! let series = japanese.series().await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod transport;

pub use config::Language;
pub use error::{DecodeError, Result, TcgDexError};
pub use transport::{Fetched, Transport};

use std::fmt;

use models::{Card, CardBrief, Serie, SerieBrief, Set, SetBrief};

// ---------------------------------------------------------------------------
// TcgDexBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TcgDex`] client.
///
/// Use [`TcgDex::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](TcgDexBuilder::build) to create the client.
#[derive(Default)]
pub struct TcgDexBuilder {
    language: Language,
    api_base: Option<String>,
    client: Option<reqwest::Client>,
}

impl TcgDexBuilder {
    /// Locale used for every request. Defaults to English.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Override the API root (without the language segment).
    ///
    /// Defaults to [`config::API_BASE`]. Useful for mirrors and local test
    /// servers.
    pub fn base_url(mut self, url: &str) -> Self {
        self.api_base = Some(url.to_string());
        self
    }

    /// Use a caller-configured HTTP client.
    ///
    /// The SDK sets no timeout, proxy or redirect policy of its own; whatever
    /// the supplied client is configured with applies to every request.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client. Fails with [`TcgDexError::InvalidRequest`] when the
    /// base path is not an absolute URL.
    pub fn build(self) -> Result<TcgDex> {
        let api_base = self.api_base.as_deref().unwrap_or(config::API_BASE);
        let base = config::base_path(api_base, self.language);
        let transport = Transport::new(self.client.unwrap_or_default(), &base)?;
        Ok(TcgDex {
            language: self.language,
            transport,
        })
    }
}

// ---------------------------------------------------------------------------
// TcgDex
// ---------------------------------------------------------------------------

/// The main entry point for the TCGdex SDK.
///
/// Every accessor is a single independent GET followed by a decode; the
/// client holds no cache and no per-call state, so it can be cloned and used
/// from many tasks at once. Dropping an accessor future abandons the request
/// with no side effects.
#[derive(Debug, Clone)]
pub struct TcgDex {
    language: Language,
    transport: Transport,
}

impl Default for TcgDex {
    fn default() -> Self {
        Self::new()
    }
}

impl TcgDex {
    /// Create a new builder for configuring the client.
    pub fn builder() -> TcgDexBuilder {
        TcgDexBuilder::default()
    }

    /// English client against the public API.
    pub fn new() -> Self {
        Self::with_language(Language::default())
    }

    /// Client against the public API for the given locale.
    pub fn with_language(language: Language) -> Self {
        let base = config::base_path(config::API_BASE, language);
        Self {
            language,
            transport: Transport::new(reqwest::Client::new(), &base)
                .expect("public API base is a valid URL"),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Base path requests are issued against, language segment included.
    pub fn base_url(&self) -> &str {
        self.transport.base()
    }

    // -- Cards -------------------------------------------------------------

    /// List every card of the catalog as [`CardBrief`] summaries.
    pub async fn cards(&self) -> Result<Vec<CardBrief>> {
        self.fetch_list(&["cards"]).await
    }

    /// Fetch one card by its global id (e.g. `"swsh3-136"`).
    ///
    /// Returns `Ok(None)` when the upstream reports that the card does not
    /// exist.
    pub async fn card(&self, id: &str) -> Result<Option<Card>> {
        self.fetch_one(&["cards", id], decode::decode_card).await
    }

    // -- Sets --------------------------------------------------------------

    pub async fn sets(&self) -> Result<Vec<SetBrief>> {
        self.fetch_list(&["sets"]).await
    }

    /// Fetch one set, with its card list, by id (e.g. `"swsh3"`).
    pub async fn set(&self, id: &str) -> Result<Option<Set>> {
        self.fetch_one(&["sets", id], decode::decode::<Set>).await
    }

    // -- Series ------------------------------------------------------------

    pub async fn series(&self) -> Result<Vec<SerieBrief>> {
        self.fetch_list(&["series"]).await
    }

    /// Fetch one serie, with its sets, by id (e.g. `"swsh"`).
    pub async fn serie(&self, id: &str) -> Result<Option<Serie>> {
        self.fetch_one(&["series", id], decode::decode::<Serie>).await
    }

    // -- Plumbing ----------------------------------------------------------

    /// A listing endpoint must exist; 404 there is a failed request.
    async fn fetch_list<T>(&self, endpoint: &[&str]) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.transport.get(endpoint).await? {
            Fetched::Found(body) => decode::decode(&body),
            Fetched::NotFound => Err(TcgDexError::RequestFailed {
                status: Some(404),
                message: format!("Listing endpoint /{} not found", endpoint.join("/")),
            }),
        }
    }

    /// 404 and an absent 2xx body both mean "no such resource".
    async fn fetch_one<T, F>(&self, endpoint: &[&str], decode_fn: F) -> Result<Option<T>>
    where
        F: FnOnce(&[u8]) -> Result<T>,
    {
        match self.transport.get(endpoint).await? {
            Fetched::Found(body) => decode::decode_optional(&body, decode_fn),
            Fetched::NotFound => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for TcgDex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TcgDex(language={}, base_url={})",
            self.language,
            self.base_url()
        )
    }
}
