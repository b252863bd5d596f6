//! Action modules for AnkiConnect operations.
//!
//! Each module provides a set of related operations grouped by domain.

mod cards;
mod decks;
mod media;
mod misc;

pub use cards::CardActions;
pub use decks::DeckActions;
pub use media::MediaActions;
pub use misc::MiscActions;
