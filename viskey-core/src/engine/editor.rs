//! Pure editing operations over (buffer, caret) pairs
//!
//! All positions are character indices, not byte offsets, so multi-byte
//! input stays intact.

use log::warn;

use crate::error::{Error, Result};

/// Inserts a character at the caret, returning the new pair.
pub fn insert_at_caret(buffer: &str, caret: usize, ch: char) -> (String, usize) {
    let split = byte_offset(buffer, caret);
    let mut next = String::with_capacity(buffer.len() + ch.len_utf8());
    next.push_str(&buffer[..split]);
    next.push(ch);
    next.push_str(&buffer[split..]);
    (next, caret + 1)
}

/// Removes the character immediately before the caret. No-op when the
/// caret is at the start.
pub fn delete_before_caret(buffer: &str, caret: usize) -> (String, usize) {
    if caret == 0 {
        return (buffer.to_string(), 0);
    }
    let end = byte_offset(buffer, caret);
    let start = byte_offset(buffer, caret - 1);
    let mut next = String::with_capacity(buffer.len());
    next.push_str(&buffer[..start]);
    next.push_str(&buffer[end..]);
    (next, caret - 1)
}

/// Clamps a caller-supplied caret into `0..=char_len`. Never fails.
pub fn clamp_caret(caret: isize, char_len: usize) -> usize {
    if caret < 0 {
        0
    } else {
        (caret as usize).min(char_len)
    }
}

/// Validates external input text.
///
/// Control characters the engine can never produce itself (anything
/// other than `\n` and `\t`) are rejected as non-textual. Oversize input
/// is truncated from the tail to `max_chars` characters with a warning,
/// never an error.
pub fn validate_input(text: &str, max_chars: usize) -> Result<String> {
    if text.chars().any(|c| c.is_control() && c != '\n' && c != '\t') {
        return Err(Error::Validation(
            "input contains non-textual control characters".to_string(),
        ));
    }
    let len = text.chars().count();
    if len > max_chars {
        warn!("input of {len} characters truncated to {max_chars}");
        Ok(text.chars().take(max_chars).collect())
    } else {
        Ok(text.to_string())
    }
}

/// Byte offset of the `caret`-th character, saturating at the end.
fn byte_offset(buffer: &str, caret: usize) -> usize {
    buffer
        .char_indices()
        .nth(caret)
        .map(|(i, _)| i)
        .unwrap_or(buffer.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_splits_at_caret() {
        assert_eq!(insert_at_caret("ac", 1, 'b'), ("abc".to_string(), 2));
        assert_eq!(insert_at_caret("", 0, 'x'), ("x".to_string(), 1));
        assert_eq!(insert_at_caret("ab", 2, 'c'), ("abc".to_string(), 3));
    }

    #[test]
    fn insert_handles_multibyte_neighbours() {
        let (buffer, caret) = insert_at_caret("é€", 1, 'x');
        assert_eq!(buffer, "éx€");
        assert_eq!(caret, 2);
    }

    #[test]
    fn delete_at_start_is_a_noop() {
        assert_eq!(delete_before_caret("abc", 0), ("abc".to_string(), 0));
        assert_eq!(delete_before_caret("", 0), (String::new(), 0));
    }

    #[test]
    fn delete_removes_one_character_before_caret() {
        assert_eq!(delete_before_caret("abc", 2), ("ac".to_string(), 1));
        assert_eq!(delete_before_caret("é€x", 2), ("éx".to_string(), 1));
    }

    #[test]
    fn clamp_caret_never_fails() {
        assert_eq!(clamp_caret(-5, 11), 0);
        assert_eq!(clamp_caret(999, 11), 11);
        assert_eq!(clamp_caret(4, 11), 4);
        assert_eq!(clamp_caret(0, 0), 0);
    }

    #[test]
    fn validate_rejects_stray_control_characters() {
        assert!(validate_input("ab\u{0}c", 100).is_err());
        assert!(validate_input("ab\rc", 100).is_err());
        assert_eq!(validate_input("a\nb\tc", 100).unwrap(), "a\nb\tc");
    }

    #[test]
    fn validate_truncates_from_the_tail() {
        assert_eq!(validate_input("abcdef", 4).unwrap(), "abcd");
        assert_eq!(validate_input("abcd", 4).unwrap(), "abcd");
    }
}
