//! Media-related AnkiConnect actions.
//!
//! Operations against the collection's media store. File contents travel
//! base64-encoded over the wire; decoding is left to the caller.

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to media-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::media()`].
#[derive(Debug)]
pub struct MediaActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct RetrieveParams<'a> {
    filename: &'a str,
}

impl<'a> MediaActions<'a> {
    /// Retrieve a media file's contents as base64.
    ///
    /// Returns the base64-encoded file contents. A missing file yields an
    /// error (the host responds with a non-string result).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cardstock::AnkiClient;
    /// # async fn example() -> cardstock::Result<()> {
    /// let client = AnkiClient::new();
    /// let encoded = client.media().retrieve("cat.png").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn retrieve(&self, filename: &str) -> Result<String> {
        self.client
            .invoke("retrieveMediaFile", RetrieveParams { filename })
            .await
    }
}
