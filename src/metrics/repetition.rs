//! Repetition metric - occurrence count of the most repeated character.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

/// Returns the number of occurrences of the most repeated character.
///
/// Counting is case-sensitive (`'A'` and `'a'` are distinct characters) and
/// every character counts, including whitespace and punctuation.
///
/// # Returns
/// - `0` if `password` is `None` or empty
/// - the highest per-character occurrence count otherwise
pub fn max_repetition_count(password: Option<&SecretString>) -> usize {
    let Some(password) = password else {
        return 0;
    };

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.expose_secret().chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    counts.values().copied().max().unwrap_or(0)
}
