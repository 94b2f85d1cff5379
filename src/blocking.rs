//! Synchronous wrapper around [`TcgDex`](crate::TcgDex) for callers without
//! an async runtime.
//!
//! Each wrapper owns a single-threaded Tokio runtime and drives the async
//! accessors to completion on the calling thread. Do not use it from inside
//! another Tokio runtime; use the async client there instead.
//!
//! # Example
//!
//! ```no_run
//! use tcgdex_sdk::blocking::TcgDex;
//!
//! let tcgdex = TcgDex::builder().build().unwrap();
//! let sets = tcgdex.sets().unwrap();
//! ```

use tokio::runtime::{Builder, Runtime};

use crate::error::{Result, TcgDexError};
use crate::models::{Card, CardBrief, Serie, SerieBrief, Set, SetBrief};
use crate::{Language, TcgDexBuilder};

// ---------------------------------------------------------------------------
// BlockingBuilder
// ---------------------------------------------------------------------------

/// Builder for a blocking [`TcgDex`]; same options as the async builder.
#[derive(Default)]
pub struct BlockingBuilder {
    inner: TcgDexBuilder,
}

impl BlockingBuilder {
    pub fn language(mut self, language: Language) -> Self {
        self.inner = self.inner.language(language);
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.inner = self.inner.client(client);
        self
    }

    pub fn build(self) -> Result<TcgDex> {
        let inner = self.inner.build()?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TcgDexError::RequestFailed {
                status: None,
                message: format!("Failed to start I/O runtime: {e}"),
            })?;
        Ok(TcgDex { inner, runtime })
    }
}

// ---------------------------------------------------------------------------
// TcgDex (blocking)
// ---------------------------------------------------------------------------

pub struct TcgDex {
    inner: crate::TcgDex,
    runtime: Runtime,
}

impl TcgDex {
    pub fn builder() -> BlockingBuilder {
        BlockingBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.inner.language()
    }

    pub fn cards(&self) -> Result<Vec<CardBrief>> {
        self.runtime.block_on(self.inner.cards())
    }

    pub fn card(&self, id: &str) -> Result<Option<Card>> {
        self.runtime.block_on(self.inner.card(id))
    }

    pub fn sets(&self) -> Result<Vec<SetBrief>> {
        self.runtime.block_on(self.inner.sets())
    }

    pub fn set(&self, id: &str) -> Result<Option<Set>> {
        self.runtime.block_on(self.inner.set(id))
    }

    pub fn series(&self) -> Result<Vec<SerieBrief>> {
        self.runtime.block_on(self.inner.series())
    }

    pub fn serie(&self, id: &str) -> Result<Option<Serie>> {
        self.runtime.block_on(self.inner.serie(id))
    }

    /// The async client this wrapper drives.
    pub fn as_async(&self) -> &crate::TcgDex {
        &self.inner
    }
}
