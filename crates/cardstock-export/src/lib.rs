//! Export a filtered slice of an Anki collection to a static HTML bundle.
//!
//! The pipeline is a single fetch → transform → write pass:
//!
//! 1. A [`Selection`] (deck/tags or note ids) becomes a search query and
//!    resolves, through the [`CardStore`], to an ordered card-id list.
//! 2. Full card records are fetched in one batch.
//! 3. For each card, internal media references are pulled out of the
//!    store into the bundle's `media/` folder and rewritten to relative
//!    paths; secondary fields become lazy popup buttons.
//! 4. [`HtmlExporter`] streams the page to `index.html` alongside a fixed
//!    stylesheet, reporting progress per card and honoring a
//!    [`CancelToken`] at card boundaries.
//!
//! Remote failures degrade to empty results by [`CardStore`] policy; the
//! only errors a run raises are an empty selection and filesystem
//! failures.
//!
//! # Quick Start
//!
//! ```no_run
//! use cardstock::AnkiClient;
//! use cardstock_export::{ConnectStore, HtmlExporter, Selection};
//!
//! # async fn example() -> cardstock_export::Result<()> {
//! let store = ConnectStore::new(AnkiClient::new());
//! let selection = Selection::filter(Some("Spanish".into()), vec!["verbs".into()]);
//!
//! let count = HtmlExporter::new(&store, "./spanish-export")
//!     .run(&selection)
//!     .await?;
//! println!("{count} cards exported");
//! # Ok(())
//! # }
//! ```

mod error;

pub mod bundle;
pub mod cancel;
pub mod media;
pub mod render;
pub mod selection;
pub mod store;

pub use bundle::HtmlExporter;
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use media::{MediaResolver, Rewritten, extract_media_refs, is_external, rewrite_media_refs};
pub use selection::Selection;
pub use store::{CardStore, ConnectStore};

// Re-export client types for convenience
pub use cardstock::{AnkiClient, CardInfo, ClientBuilder, NoteField};
