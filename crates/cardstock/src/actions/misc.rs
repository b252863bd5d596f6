//! Miscellaneous AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to miscellaneous AnkiConnect operations.
///
/// Obtained via [`AnkiClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> MiscActions<'a> {
    /// Get the AnkiConnect API version.
    ///
    /// Useful as a cheap connectivity check before starting a longer
    /// operation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cardstock::AnkiClient;
    /// # async fn example() -> cardstock::Result<()> {
    /// let client = AnkiClient::new();
    /// let version = client.misc().version().await?;
    /// assert_eq!(version, 6);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn version(&self) -> Result<u8> {
        self.client.invoke_without_params("version").await
    }

    /// List every tag used in the collection.
    pub async fn tags(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("getTags").await
    }
}
