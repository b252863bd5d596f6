//! Command-line exporter: pick a deck/tag filter (or explicit notes),
//! point it at a folder, and get a browsable HTML bundle.
//!
//! `--list-decks` and `--list-tags` enumerate the choices for building a
//! selection. Ctrl-C requests cancellation; the export stops at the next
//! card boundary.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use cardstock::AnkiClient;
use cardstock_export::{CancelToken, ConnectStore, HtmlExporter, Selection};
use clap::Parser;
use tracing::info;

/// Export Anki cards to a self-contained static HTML bundle.
#[derive(Parser, Debug)]
#[command(name = "cardstock")]
#[command(version, about, long_about = None)]
struct Args {
    /// Deck to export
    #[arg(long)]
    deck: Option<String>,

    /// Tag to filter by (may be given multiple times)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Export the cards of these notes instead (overrides --deck/--tag)
    #[arg(long = "note-id")]
    note_ids: Vec<i64>,

    /// Folder the export folder is created under
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List deck names and exit
    #[arg(long)]
    list_decks: bool,

    /// List tags and exit
    #[arg(long)]
    list_tags: bool,

    /// AnkiConnect host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// AnkiConnect port
    #[arg(long, default_value_t = 8765)]
    port: u16,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let url = format!("http://{}:{}", args.host, args.port);
    let client = AnkiClient::builder().url(&url).build();

    if args.list_decks {
        return print_listing(client.decks().names().await);
    }
    if args.list_tags {
        return print_listing(client.misc().tags().await);
    }

    let selection = if args.note_ids.is_empty() {
        Selection::filter(args.deck.clone(), args.tags.clone())
    } else {
        Selection::notes(args.note_ids.clone())
    };
    if selection.is_empty() {
        eprintln!("Provide a deck, tags, or note ids to export.");
        return ExitCode::from(2);
    }
    let Some(output) = args.output.as_deref() else {
        eprintln!("Provide a destination folder with --output.");
        return ExitCode::from(2);
    };

    // Fail early with a friendly message when the host is unreachable,
    // rather than halfway into the export.
    if let Err(e) = client.misc().version().await {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let out_dir = output.join(export_folder_name(
        args.deck.as_deref(),
        &args.tags,
        args.note_ids.len(),
    ));
    info!(anki_url = %url, path = %out_dir.display(), "starting export");

    let token = CancelToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nStopping after the current card...");
            ctrl_c.cancel();
        }
    });

    let store = ConnectStore::new(client);
    let result = HtmlExporter::new(&store, &out_dir)
        .on_progress(|done, total| {
            print!("\r{done}/{total} cards");
            let _ = std::io::stdout().flush();
        })
        .cancel_token(token.clone())
        .run(&selection)
        .await;

    println!();
    match result {
        Ok(_) if token.is_cancelled() => {
            println!("Export cancelled.");
            ExitCode::SUCCESS
        }
        Ok(0) => {
            println!("No matching cards found.");
            ExitCode::SUCCESS
        }
        Ok(count) => {
            println!("{count} cards exported to {}.", out_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Export failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_listing(result: cardstock::Result<Vec<String>>) -> ExitCode {
    match result {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Derive the export folder name from the selection, e.g.
/// `card_export_Spanish_verbs`. Spaces become underscores.
fn export_folder_name(deck: Option<&str>, tags: &[String], note_count: usize) -> String {
    let mut parts = vec!["card_export".to_string()];
    if note_count > 0 {
        parts.push("selection".to_string());
    } else {
        if let Some(deck) = deck.filter(|d| !d.is_empty()) {
            parts.push(deck.replace(' ', "_"));
        }
        parts.extend(tags.iter().map(|tag| tag.replace(' ', "_")));
    }
    parts.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_deck_and_tags() {
        let name = export_folder_name(Some("Spanish Verbs"), &["a1".to_string()], 0);
        assert_eq!(name, "card_export_Spanish_Verbs_a1");
    }

    #[test]
    fn test_folder_name_tags_only() {
        let name = export_folder_name(None, &["verbs".to_string(), "a1".to_string()], 0);
        assert_eq!(name, "card_export_verbs_a1");
    }

    #[test]
    fn test_folder_name_for_note_selection() {
        assert_eq!(export_folder_name(None, &[], 3), "card_export_selection");
    }

    #[test]
    fn test_folder_name_ignores_empty_deck() {
        assert_eq!(export_folder_name(Some(""), &[], 0), "card_export");
    }
}
