//! Deck-related AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> DeckActions<'a> {
    /// List the names of all decks in the collection.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cardstock::AnkiClient;
    /// # async fn example() -> cardstock::Result<()> {
    /// let client = AnkiClient::new();
    /// for deck in client.decks().names().await? {
    ///     println!("{}", deck);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames").await
    }
}
