//! Sentence transforms.

pub mod case;
pub mod shuffle;

pub use case::semi_capitalize;
pub use shuffle::shuffle_words;

/// Reply for a missing or empty sentence field.
pub const EMPTY_SENTENCE: &str = "Sentence is empty";
