//! Sequence metric - longest ascending/descending run of letters and digits.

use secrecy::{ExposeSecret, SecretString};

/// Returns the length of the longest run of adjacent letters/digits whose
/// case-normalized code points step by exactly +1 or -1.
///
/// Comparison is case-insensitive (`'A'` and `'b'` are sequential) and there
/// is no wrap-around (`'z'` followed by `'a'` is not sequential). Any
/// non-alphanumeric character is a hard break: runs never bridge across it.
/// A change of direction (e.g. `"...234321..."`) starts a new run.
///
/// # Returns
/// - `0` if `password` is `None`, empty, or contains no letters/digits
/// - `1` for a lone letter/digit with no sequential neighbor
/// - the longest run length otherwise, counted in characters
pub fn max_sequence_length(password: Option<&SecretString>) -> usize {
    let Some(password) = password else {
        return 0;
    };

    let mut max_len = 0usize;
    let mut ascending = 0usize;
    let mut descending = 0usize;
    let mut prev: Option<u32> = None;

    for c in password.expose_secret().chars() {
        if !c.is_alphanumeric() {
            // Hard break: the character contributes nothing and the next
            // alphanumeric starts from scratch.
            ascending = 0;
            descending = 0;
            prev = None;
            continue;
        }

        let code = normalize(c);
        match prev {
            Some(p) if code == p + 1 => {
                ascending += 1;
                descending = 1;
            }
            Some(p) if code + 1 == p => {
                descending += 1;
                ascending = 1;
            }
            _ => {
                ascending = 1;
                descending = 1;
            }
        }

        max_len = max_len.max(ascending).max(descending);
        prev = Some(code);
    }

    max_len
}

/// Case-normalized code point used for the sequence comparison.
fn normalize(c: char) -> u32 {
    c.to_lowercase().next().unwrap_or(c) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(password: &str) -> usize {
        let pwd = SecretString::new(password.to_string().into());
        max_sequence_length(Some(&pwd))
    }

    #[test]
    fn test_sequence_none_and_empty() {
        assert_eq!(max_sequence_length(None), 0);
        assert_eq!(seq(""), 0);
    }

    #[test]
    fn test_sequence_no_alphanumerics() {
        assert_eq!(seq("/*_-"), 0);
        assert_eq!(seq(":}{}:"), 0);
    }

    #[test]
    fn test_sequence_lone_alphanumeric() {
        assert_eq!(seq("a"), 1);
        assert_eq!(seq("7"), 1);
    }

    #[test]
    fn test_sequence_simple_ascending() {
        assert_eq!(seq("abcdef"), 6);
        assert_eq!(seq("0123456789"), 10);
    }

    #[test]
    fn test_sequence_simple_descending() {
        assert_eq!(seq("fedcba"), 6);
        assert_eq!(seq("9876543210"), 10);
    }

    #[test]
    fn test_sequence_mixed_case() {
        assert_eq!(seq("ABCdef"), 6);
        assert_eq!(seq("fedCBA"), 6);
        assert_eq!(seq("AbCdEf"), 6);
    }

    #[test]
    fn test_sequence_no_wrap_around() {
        assert_eq!(seq("za"), 1);
        assert_eq!(seq("a9"), 1);
    }

    #[test]
    fn test_sequence_equal_chars_are_not_sequential() {
        assert_eq!(seq("aa"), 1);
        assert_eq!(seq("aab"), 2);
    }

    #[test]
    fn test_sequence_special_char_breaks_run() {
        // The underscore must break the run, not be skipped over.
        assert_eq!(seq("123456_54321"), 6);
        assert_eq!(seq("/012345678"), 9);
        assert_eq!(seq("0123456789:"), 10);
        assert_eq!(seq(":}{}:12345"), 5);
        assert_eq!(seq("123][]/]{}"), 3);
    }

    #[test]
    fn test_sequence_direction_change_starts_new_run() {
        assert_eq!(seq("BcDeDcBa"), 5);
        assert_eq!(seq("98736369876"), 4);
        assert_eq!(seq("98763636987"), 4);
    }

    #[test]
    fn test_sequence_longest_of_multiple_runs() {
        assert_eq!(seq("123_abcd_56789_efghijklmno_ab_4321"), 11);
        assert_eq!(seq("ABZCDE"), 3);
        assert_eq!(seq("ABCKAB"), 3);
    }

    #[test]
    fn test_sequence_non_sequential_alphanumerics() {
        assert_eq!(seq("1pass2word3"), 1);
        assert_eq!(seq("MyP@ssw0rd!"), 1);
        assert_eq!(seq("password123"), 3);
    }
}
