//! Types returned by AnkiConnect actions.

mod card;

pub use card::{CardInfo, NoteField};
