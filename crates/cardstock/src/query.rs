//! Query construction for the collection search syntax.
//!
//! [`QueryBuilder`] assembles the conjunctive deck/tag filters used when
//! exporting by selection; [`note_query`] builds the disjunctive note-id
//! form. Clause shapes follow what the host application's search parser
//! expects: deck names are always quoted, tags are passed through verbatim.
//!
//! # Example
//!
//! ```
//! use cardstock::QueryBuilder;
//!
//! let query = QueryBuilder::new()
//!     .deck("Spanish")
//!     .tag("verbs")
//!     .build();
//!
//! assert_eq!(query, "deck:\"Spanish\" tag:verbs");
//! ```

/// A builder for collection search queries.
///
/// Clauses are joined with spaces, which the host API treats as a
/// conjunction.
#[derive(Debug, Clone, Default)]
#[must_use = "QueryBuilder does nothing until .build() is called"]
pub struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    /// Create a new empty query builder.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Filter by deck name.
    ///
    /// The name is always quoted, so hierarchical decks and names with
    /// spaces pass through as one clause.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::QueryBuilder;
    ///
    /// let q = QueryBuilder::new().deck("Languages::Italian").build();
    /// assert_eq!(q, "deck:\"Languages::Italian\"");
    /// ```
    pub fn deck(mut self, name: &str) -> Self {
        self.parts.push(format!("deck:\"{}\"", escape_quotes(name)));
        self
    }

    /// Filter by tag.
    ///
    /// The tag is not quoted, matching the host API's tag-matching
    /// semantics. A tag containing spaces is passed through verbatim and
    /// will be read as two clauses - a known limitation.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::QueryBuilder;
    ///
    /// let q = QueryBuilder::new().tag("verbs").build();
    /// assert_eq!(q, "tag:verbs");
    /// ```
    pub fn tag(mut self, tag: &str) -> Self {
        self.parts.push(format!("tag:{}", tag));
        self
    }

    /// Add a raw query clause.
    ///
    /// Escape hatch for search syntax not covered by the builder.
    pub fn raw(mut self, query: &str) -> Self {
        self.parts.push(query.to_string());
        self
    }

    /// True if no clause has been added yet.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Build the final query string.
    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

impl std::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts.join(" "))
    }
}

/// Build a disjunctive query matching the given note ids, preserving
/// input order: `nid:1 OR nid:2 OR ...`.
pub fn note_query(note_ids: &[i64]) -> String {
    note_ids
        .iter()
        .map(|id| format!("nid:{}", id))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Escape double quotes in a string.
fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let q = QueryBuilder::new();
        assert!(q.is_empty());
        assert_eq!(q.build(), "");
    }

    #[test]
    fn test_deck_is_always_quoted() {
        let q = QueryBuilder::new().deck("Spanish").build();
        assert_eq!(q, "deck:\"Spanish\"");

        let q = QueryBuilder::new().deck("My Deck").build();
        assert_eq!(q, "deck:\"My Deck\"");
    }

    #[test]
    fn test_deck_with_embedded_quote() {
        let q = QueryBuilder::new().deck("He said \"hi\"").build();
        assert_eq!(q, "deck:\"He said \\\"hi\\\"\"");
    }

    #[test]
    fn test_tag_is_verbatim() {
        let q = QueryBuilder::new().tag("verbs").build();
        assert_eq!(q, "tag:verbs");

        // Spaces pass through unquoted.
        let q = QueryBuilder::new().tag("irregular verbs").build();
        assert_eq!(q, "tag:irregular verbs");
    }

    #[test]
    fn test_deck_and_tags_conjunction() {
        let q = QueryBuilder::new()
            .deck("Spanish")
            .tag("verbs")
            .tag("a1")
            .build();
        assert_eq!(q, "deck:\"Spanish\" tag:verbs tag:a1");
    }

    #[test]
    fn test_raw_escape_hatch() {
        let q = QueryBuilder::new().deck("Test").raw("is:due").build();
        assert_eq!(q, "deck:\"Test\" is:due");
    }

    #[test]
    fn test_display() {
        let q = QueryBuilder::new().deck("Test").tag("x");
        assert_eq!(format!("{}", q), "deck:\"Test\" tag:x");
    }

    #[test]
    fn test_note_query_preserves_order() {
        assert_eq!(note_query(&[3, 1, 2]), "nid:3 OR nid:1 OR nid:2");
        assert_eq!(note_query(&[42]), "nid:42");
        assert_eq!(note_query(&[]), "");
    }
}
