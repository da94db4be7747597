//! Word-order shuffling.

use crate::random::RandomSource;

/// Randomly permute the space-delimited words of `sentence`.
///
/// Splits on every single space, so doubled spaces yield empty words that
/// move around like the others.
pub fn shuffle_words(source: &RandomSource, sentence: &str) -> String {
    let mut words: Vec<&str> = sentence.split(' ').collect();
    source.shuffle(&mut words);
    words.join(" ")
}
