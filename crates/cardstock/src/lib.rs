//! An async Rust client for the AnkiConnect card-store API.
//!
//! This crate provides typed access to the subset of AnkiConnect actions
//! needed to search a collection, fetch card contents, and pull media files
//! out of the media store. It is the transport layer under
//! `cardstock-export`; errors are reported in full here and any
//! degrade-to-empty policy belongs to the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! use cardstock::AnkiClient;
//!
//! # async fn example() -> cardstock::Result<()> {
//! // Connect with default settings (localhost:8765)
//! let client = AnkiClient::new();
//!
//! // Check that AnkiConnect is reachable
//! let version = client.misc().version().await?;
//! println!("AnkiConnect version: {}", version);
//!
//! // Find cards and fetch their contents
//! let ids = client.cards().find("deck:\"Spanish\" tag:verbs").await?;
//! let cards = client.cards().info(&ids).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`AnkiClient::cards()`] - Find cards and fetch full card records
//! - [`AnkiClient::decks()`] - List deck names
//! - [`AnkiClient::media()`] - Retrieve media files from the store
//! - [`AnkiClient::misc()`] - Version check and collection-wide tag list
//!
//! # Requirements
//!
//! Anki must be running with the AnkiConnect add-on installed. By default
//! the client connects to `http://127.0.0.1:8765`.

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
mod request;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use query::{QueryBuilder, note_query};
pub use types::{CardInfo, NoteField};
