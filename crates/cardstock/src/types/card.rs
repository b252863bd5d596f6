//! Card-related types.

use std::collections::HashMap;

use serde::Deserialize;

/// A full card record as returned by the `cardsInfo` action.
///
/// Immutable once fetched. Everything except the card ID tolerates
/// absence, since the host API's responses vary between versions - in
/// particular `tags` is missing on some hosts and defaults to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// The card ID.
    pub card_id: i64,
    /// The note ID this card was generated from.
    #[serde(default, alias = "nid", alias = "note")]
    pub note_id: i64,
    /// The deck this card belongs to.
    #[serde(default)]
    pub deck_name: String,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// The card's question side (HTML).
    #[serde(default)]
    pub question: String,
    /// The card's answer side (HTML).
    #[serde(default)]
    pub answer: String,
    /// Field values from the note, keyed by field name.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// Tags on the note.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single field value on a note.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteField {
    /// The field content (HTML).
    #[serde(default)]
    pub value: String,
    /// The field's position in the note type.
    #[serde(default)]
    pub order: i64,
}
