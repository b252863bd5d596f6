//! Card-related AnkiConnect actions.
//!
//! Finding cards by query and fetching their full records. Note that cards
//! are generated from notes - one note can produce multiple cards.
//!
//! # Example
//!
//! ```no_run
//! use cardstock::AnkiClient;
//!
//! # async fn example() -> cardstock::Result<()> {
//! let client = AnkiClient::new();
//!
//! let ids = client.cards().find("deck:\"Spanish\" tag:verbs").await?;
//! let cards = client.cards().info(&ids).await?;
//! for card in cards {
//!     println!("Card {} has {} fields", card.card_id, card.fields.len());
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::CardInfo;

/// Provides access to card-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

// Parameter structs
#[derive(Serialize)]
struct FindCardsParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct CardsInfoParams<'a> {
    cards: &'a [i64],
}

impl<'a> CardActions<'a> {
    /// Find cards matching a query.
    ///
    /// Returns card IDs in the collection's match order. Use
    /// [`info()`](Self::info) to get the full records. An empty result is
    /// an ordinary outcome, not an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cardstock::AnkiClient;
    /// # async fn example() -> cardstock::Result<()> {
    /// let client = AnkiClient::new();
    /// let ids = client.cards().find("nid:1 OR nid:2").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findCards", FindCardsParams { query })
            .await
    }

    /// Get full records for a batch of cards.
    ///
    /// One [`CardInfo`] per requested ID, order preserved.
    pub async fn info(&self, card_ids: &[i64]) -> Result<Vec<CardInfo>> {
        self.client
            .invoke("cardsInfo", CardsInfoParams { cards: card_ids })
            .await
    }
}
