//! The export orchestrator: drives the pipeline and writes the bundle.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::media::MediaResolver;
use crate::render::{PAGE_FOOTER, STYLESHEET, page_header, render_card};
use crate::selection::Selection;
use crate::store::CardStore;

/// Exports a selection of cards to a static HTML bundle.
///
/// Configure with the builder-style methods, then call [`run`](Self::run).
/// The run resolves the selection to card ids, fetches the records in one
/// batch, and streams one card block at a time into
/// `<output_base>/index.html`, copying referenced media into
/// `<output_base>/media/` as it goes.
///
/// # Example
///
/// ```no_run
/// use cardstock::AnkiClient;
/// use cardstock_export::{CancelToken, ConnectStore, HtmlExporter, Selection};
///
/// # async fn example() -> cardstock_export::Result<()> {
/// let store = ConnectStore::new(AnkiClient::new());
/// let token = CancelToken::new();
///
/// let count = HtmlExporter::new(&store, "/tmp/spanish-export")
///     .on_progress(|done, total| println!("{done}/{total}"))
///     .cancel_token(token.clone())
///     .run(&Selection::deck("Spanish"))
///     .await?;
///
/// println!("{count} cards exported");
/// # Ok(())
/// # }
/// ```
pub struct HtmlExporter<'a, S: CardStore> {
    store: &'a S,
    output_base: PathBuf,
    progress: Option<Box<dyn FnMut(usize, usize) + Send + 'a>>,
    cancel: CancelToken,
}

impl<'a, S: CardStore> HtmlExporter<'a, S> {
    /// Create an exporter writing into `output_base`.
    pub fn new(store: &'a S, output_base: impl Into<PathBuf>) -> Self {
        Self {
            store,
            output_base: output_base.into(),
            progress: None,
            cancel: CancelToken::new(),
        }
    }

    /// Report progress after each card as `(processed_so_far, total)`.
    ///
    /// Calls are strictly monotonic and happen on the exporting task;
    /// marshaling to a UI thread is the caller's concern.
    pub fn on_progress(mut self, callback: impl FnMut(usize, usize) + Send + 'a) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Observe a cancellation token, polled once per card boundary.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Run the export.
    ///
    /// Returns the number of cards written. `0` means nothing matched the
    /// selection *or* the run was cancelled - the two are deliberately
    /// indistinguishable here, matching the host add-on's contract; a
    /// caller that needs to tell them apart can inspect its own token.
    ///
    /// An empty selection fails with
    /// [`Error::InvalidSelection`](crate::Error::InvalidSelection) before
    /// any network or filesystem access. Filesystem errors propagate as
    /// [`Error::Io`](crate::Error::Io) and may leave a partial bundle
    /// behind; there is no rollback.
    pub async fn run(mut self, selection: &Selection) -> Result<usize> {
        let query = selection.to_query()?;

        let card_ids = self.store.find_cards(&query).await;
        if card_ids.is_empty() {
            info!(query = %query, "no cards matched");
            return Ok(0);
        }

        let cards = self.store.cards_info(&card_ids).await;
        if cards.is_empty() {
            return Ok(0);
        }
        let total = cards.len();

        let media_dir = self.output_base.join("media");
        let css_dir = self.output_base.join("css");
        fs::create_dir_all(&media_dir)?;
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("styles.css"), STYLESHEET)?;

        let index_path = self.output_base.join("index.html");
        let mut out = BufWriter::new(File::create(&index_path)?);
        out.write_all(page_header().as_bytes())?;

        let resolver = MediaResolver::new(self.store, &media_dir);
        let mut processed = 0;

        for card in &cards {
            if self.cancel.is_cancelled() {
                // Cancellation only takes effect here, at a card
                // boundary; what was already written stays on disk.
                info!(processed, total, "export cancelled");
                out.flush()?;
                return Ok(0);
            }

            let block = render_card(card, &resolver).await?;
            out.write_all(block.as_bytes())?;
            processed += 1;

            if let Some(callback) = self.progress.as_mut() {
                callback(processed, total);
            }
        }

        out.write_all(PAGE_FOOTER.as_bytes())?;
        out.flush()?;
        info!(total, path = %index_path.display(), "export complete");
        Ok(processed)
    }
}
