//! What to export: a deck/tag filter or an explicit note-id list.

use cardstock::{QueryBuilder, note_query};

use crate::error::{Error, Result};

/// The card selection an export run operates on.
///
/// Either a deck/tag filter (conjunctive) or an explicit list of note ids
/// (disjunctive). When a caller has both, note ids win - construct
/// [`Selection::notes`] and drop the filter.
///
/// # Example
///
/// ```
/// use cardstock_export::Selection;
///
/// let sel = Selection::filter(Some("Spanish".into()), vec!["verbs".into()]);
/// assert_eq!(sel.to_query().unwrap(), "deck:\"Spanish\" tag:verbs");
///
/// let sel = Selection::notes(vec![1, 2]);
/// assert_eq!(sel.to_query().unwrap(), "nid:1 OR nid:2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Cards matching a deck and/or a set of tags.
    Filter {
        /// Deck name, if filtering by deck.
        deck: Option<String>,
        /// One `tag:` clause per entry.
        tags: Vec<String>,
    },
    /// Cards generated from these notes, in this order.
    Notes(Vec<i64>),
}

impl Selection {
    /// Select every card in a deck.
    pub fn deck(name: impl Into<String>) -> Self {
        Selection::Filter {
            deck: Some(name.into()),
            tags: Vec::new(),
        }
    }

    /// Select by deck and/or tags.
    pub fn filter(deck: Option<String>, tags: Vec<String>) -> Self {
        Selection::Filter { deck, tags }
    }

    /// Select the cards of an explicit note-id list.
    pub fn notes(note_ids: Vec<i64>) -> Self {
        Selection::Notes(note_ids)
    }

    /// True when the selection would match on nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Filter { deck, tags } => {
                deck.as_deref().is_none_or(str::is_empty) && tags.is_empty()
            }
            Selection::Notes(ids) => ids.is_empty(),
        }
    }

    /// Build the search query for this selection.
    ///
    /// Fails with [`Error::InvalidSelection`] when there is nothing to
    /// select by - checked here, before any network or filesystem call.
    pub fn to_query(&self) -> Result<String> {
        if self.is_empty() {
            return Err(Error::InvalidSelection);
        }
        Ok(match self {
            Selection::Filter { deck, tags } => {
                let mut query = QueryBuilder::new();
                if let Some(deck) = deck.as_deref().filter(|d| !d.is_empty()) {
                    query = query.deck(deck);
                }
                for tag in tags {
                    query = query.tag(tag);
                }
                query.build()
            }
            Selection::Notes(ids) => note_query(ids),
        })
    }
}
