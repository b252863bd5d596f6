//! The card-store capability the pipeline runs against.
//!
//! [`CardStore`] is the narrow interface the export pipeline needs from
//! the host application, and it is where the error policy lives: a failed
//! remote call is logged and mapped to an empty result, never raised.
//! Making the swallowing part of the interface contract (rather than
//! incidental exception handling) lets tests inject failures
//! deterministically with a plain in-memory implementation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use cardstock::{AnkiClient, CardInfo};
use tracing::warn;

/// Read access to a card collection and its media store.
///
/// All three operations degrade instead of failing: a lookup or fetch
/// that goes wrong yields an empty sequence or `None`. Callers therefore
/// cannot distinguish "zero matched" from "the call failed" - that is the
/// documented contract, not an accident.
#[allow(async_fn_in_trait)]
pub trait CardStore {
    /// Resolve a search query to an ordered list of card ids.
    async fn find_cards(&self, query: &str) -> Vec<i64>;

    /// Fetch full card records for a batch of ids, order preserved.
    async fn cards_info(&self, card_ids: &[i64]) -> Vec<CardInfo>;

    /// Fetch the raw bytes of a media file, or `None` if the store does
    /// not have it (or the call failed).
    async fn fetch_media(&self, filename: &str) -> Option<Vec<u8>>;
}

/// [`CardStore`] backed by a live AnkiConnect endpoint.
///
/// Media payloads arrive base64-encoded and are decoded here; a payload
/// that is not valid base64 counts as a failed fetch.
#[derive(Debug, Clone)]
pub struct ConnectStore {
    client: AnkiClient,
}

impl ConnectStore {
    /// Wrap an [`AnkiClient`].
    pub fn new(client: AnkiClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &AnkiClient {
        &self.client
    }
}

impl CardStore for ConnectStore {
    async fn find_cards(&self, query: &str) -> Vec<i64> {
        match self.client.cards().find(query).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, query = %query, "card lookup failed, treating as no matches");
                Vec::new()
            }
        }
    }

    async fn cards_info(&self, card_ids: &[i64]) -> Vec<CardInfo> {
        if card_ids.is_empty() {
            return Vec::new();
        }
        match self.client.cards().info(card_ids).await {
            Ok(cards) => cards,
            Err(e) => {
                warn!(error = %e, "card fetch failed, treating as nothing to export");
                Vec::new()
            }
        }
    }

    async fn fetch_media(&self, filename: &str) -> Option<Vec<u8>> {
        let encoded = match self.client.media().retrieve(filename).await {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, filename = %filename, "media fetch failed, leaving reference unresolved");
                return None;
            }
        };
        match BASE64.decode(encoded.as_bytes()) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, filename = %filename, "media payload is not valid base64");
                None
            }
        }
    }
}
