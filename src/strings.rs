// Character and string domains.
// Characters come in a "friendly" order rather than by code point: letters,
// then digits, then printable symbols, then controls, then everything past
// ASCII. Strings are lists of characters.

use crate::lazy::LazySeq;
use crate::product::{lists, lists_shortlex};

/// Inclusive code point range, skipping values that are not `char`s.
fn char_range(start: u32, end: u32) -> LazySeq<char> {
    LazySeq::new(move || (start..=end).filter_map(char::from_u32))
}

/// The printable ASCII blocks that are neither letters nor digits.
fn ascii_symbols() -> LazySeq<char> {
    LazySeq::concat_all(LazySeq::from_vec(vec![
        char_range(0x20, 0x2F),
        char_range(0x3A, 0x40),
        char_range(0x5B, 0x60),
        char_range(0x7B, 0x7E),
    ]))
}

fn ascii_controls() -> LazySeq<char> {
    char_range(0x00, 0x1F).concat(&LazySeq::once('\u{7F}'))
}

/// All 128 ASCII characters: `a-z`, `A-Z`, `0-9`, symbols, controls.
pub fn ascii_characters() -> LazySeq<char> {
    LazySeq::concat_all(LazySeq::from_vec(vec![
        char_range('a' as u32, 'z' as u32),
        char_range('A' as u32, 'Z' as u32),
        char_range('0' as u32, '9' as u32),
        ascii_symbols(),
        ascii_controls(),
    ]))
}

/// Every Unicode scalar value, ASCII first in friendly order. Surrogates are
/// not characters and never appear.
pub fn characters() -> LazySeq<char> {
    ascii_characters().concat(&char_range(0x80, char::MAX as u32))
}

/// Strings over a caller-chosen alphabet, shortest dominating early.
pub fn strings_over(alphabet: &LazySeq<char>) -> LazySeq<String> {
    lists(alphabet).map(|chars| chars.into_iter().collect())
}

/// Strings over a finite alphabet, by length then lexicographically.
pub fn strings_shortlex(alphabet: &LazySeq<char>) -> LazySeq<String> {
    lists_shortlex(alphabet).map(|chars| chars.into_iter().collect())
}

pub fn ascii_strings() -> LazySeq<String> {
    strings_over(&ascii_characters())
}

pub fn strings() -> LazySeq<String> {
    strings_over(&characters())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ascii_characters_friendly_order() {
        let all: Vec<char> = ascii_characters().iter().collect();
        assert_eq!(all.len(), 128);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 128);
        assert_eq!(&all[..3], &['a', 'b', 'c']);
        assert_eq!(all[26], 'A');
        assert_eq!(all[52], '0');
        assert_eq!(all[62], ' ');
        assert_eq!(all[127], '\u{7F}');
        assert!(all.iter().all(char::is_ascii));
    }

    #[test]
    fn test_characters_cover_all_scalar_values() {
        let chars = characters();
        assert_eq!(chars.len_finite(), 0x110000 - 0x800);
        assert_eq!(chars.iter().nth(128), Some('\u{80}'));
        assert!(!chars.iter().any(|c| (0xD800..=0xDFFF).contains(&(c as u32))));
    }

    #[test]
    fn test_strings_start_with_empty_then_short() {
        let first: Vec<String> = ascii_strings().iter().take(4).collect();
        assert_eq!(first, vec!["", "a", "aa", "b"]);
    }

    #[test]
    fn test_strings_shortlex() {
        let abc = LazySeq::from_vec(vec!['a', 'b']);
        let first: Vec<String> = strings_shortlex(&abc).iter().take(5).collect();
        assert_eq!(first, vec!["", "a", "b", "aa", "ab"]);
    }
}
