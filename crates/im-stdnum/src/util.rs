//! Input cleaning and character predicates shared by every identifier kind
//!
//! Cleaning never fails: anything unusable is left for the validators to
//! reject. All helpers here are pure and safe on arbitrary (non-ASCII) input.

use crate::error::{Result, ValidationError};

/// Remove every character in `separators` and strip outer whitespace.
///
/// Case is left untouched.
///
/// # Examples
/// ```
/// use im_stdnum::util::clean;
/// assert_eq!(clean(" 756.9217.0769.85 ", " .-"), "7569217076985");
/// assert_eq!(clean("ab-cd", ""), "ab-cd");
/// ```
pub fn clean(raw: &str, separators: &str) -> String {
    raw.chars()
        .filter(|c| !separators.contains(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Remove a leading two-letter country prefix, ignoring case.
///
/// Repeated prefixes are all removed so that cleaning stays idempotent.
///
/// # Examples
/// ```
/// use im_stdnum::util::strip_country_prefix;
/// assert_eq!(strip_country_prefix("be0403019261", "BE"), "0403019261");
/// assert_eq!(strip_country_prefix("0403019261", "BE"), "0403019261");
/// ```
pub fn strip_country_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    let mut rest = s;
    while let Some(stripped) = strip_prefix_ignore_case(rest, prefix) {
        rest = stripped.trim_start();
    }
    rest
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() || !prefix.is_ascii() {
        return None;
    }
    let head = s.as_bytes().get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix.as_bytes()) {
        // The head matched ASCII bytes, so the split point is a char boundary
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// Upper-case ASCII letters; digits and everything else are unchanged.
pub fn uppercase_if_alpha(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// True iff `s` is non-empty and made only of ASCII `0`..`9`.
///
/// Locale-specific digit characters (Arabic-Indic, full-width, ...) are not digits here.
pub fn is_all_decimal_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True iff every character of `s` appears in `alphabet`.
pub fn is_all_of(s: &str, alphabet: &str) -> bool {
    s.chars().all(|c| alphabet.contains(c))
}

/// True iff `s` is non-empty and made only of ASCII `A`..`Z`.
pub fn is_all_uppercase_letters(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Decimal digit values of `s`, or `InvalidFormat` if any character is not `0`..`9`.
pub fn parse_digits(s: &str) -> Result<Vec<u32>> {
    s.bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(u32::from(b - b'0'))
            } else {
                Err(ValidationError::InvalidFormat)
            }
        })
        .collect()
}

/// Digit values of a string already known to be all ASCII digits.
pub(crate) fn digit_values(s: &str) -> Vec<u32> {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| u32::from(b - b'0'))
        .collect()
}

/// Render a single decimal digit.
pub(crate) fn digit_char(value: u32) -> String {
    char::from_digit(value % 10, 10)
        .map(String::from)
        .unwrap_or_default()
}

/// Split `s` into consecutive groups of the given character counts.
///
/// Any remainder becomes a final group; short input yields fewer groups.
///
/// # Examples
/// ```
/// use im_stdnum::util::split_groups;
/// assert_eq!(split_groups("7569217076985", &[3, 4, 4]), vec!["756", "9217", "0769", "85"]);
/// assert_eq!(split_groups("75", &[3, 4]), vec!["75"]);
/// ```
pub fn split_groups<'a>(s: &'a str, sizes: &[usize]) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(sizes.len() + 1);
    let mut rest = s;
    for &size in sizes {
        if rest.is_empty() {
            break;
        }
        let end = char_offset(rest, size);
        let (head, tail) = rest.split_at(end);
        parts.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        parts.push(rest);
    }
    parts
}

/// Split off the last `n` characters: `("payload", "check")`.
pub fn split_tail(s: &str, n: usize) -> (&str, &str) {
    let count = s.chars().count();
    let at = char_offset(s, count.saturating_sub(n));
    s.split_at(at)
}

/// Group characters in blocks of `size` counted from the right.
///
/// # Examples
/// ```
/// use im_stdnum::util::group_from_right;
/// assert_eq!(group_from_right("213123432", 3, "."), "213.123.432");
/// assert_eq!(group_from_right("1213123432", 3, "."), "1.213.123.432");
/// ```
pub fn group_from_right(s: &str, size: usize, separator: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if size == 0 {
        return s.to_string();
    }
    let mut groups: Vec<String> = chars
        .rchunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();
    groups.join(separator)
}

/// Number of characters in `s`.
///
/// Length rules count characters, not UTF-8 bytes.
///
/// # Examples
/// ```
/// use im_stdnum::util::char_len;
/// assert_eq!(char_len("7569217076985"), 13);
/// assert_eq!(char_len("ÄÖÜß"), 4);
/// ```
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `n`-th character (or the end of the string).
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_separators_and_whitespace() {
        assert_eq!(clean("  213.123.432-1 ", ".-"), "2131234321");
        assert_eq!(clean("\t12 34\n", " "), "1234");
    }

    #[test]
    fn test_clean_keeps_case() {
        assert_eq!(clean("ab CD", " "), "abCD");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean(" - 12 - 34 - ", " -");
        assert_eq!(clean(&once, " -"), once);
    }

    #[test]
    fn test_strip_country_prefix() {
        assert_eq!(strip_country_prefix("CY10259033P", "CY"), "10259033P");
        assert_eq!(strip_country_prefix("cy10259033P", "CY"), "10259033P");
        assert_eq!(strip_country_prefix("CYCY123", "CY"), "123");
        assert_eq!(strip_country_prefix("C", "CY"), "C");
        assert_eq!(strip_country_prefix("", "CY"), "");
    }

    #[test]
    fn test_strip_country_prefix_non_ascii() {
        assert_eq!(strip_country_prefix("é123", "CY"), "é123");
        assert_eq!(strip_country_prefix("Cé", "CY"), "Cé");
    }

    #[test]
    fn test_uppercase_if_alpha() {
        assert_eq!(uppercase_if_alpha("agri12fr"), "AGRI12FR");
    }

    #[test]
    fn test_is_all_decimal_digits() {
        assert!(is_all_decimal_digits("0123456789"));
        assert!(!is_all_decimal_digits(""));
        assert!(!is_all_decimal_digits("12a"));
        // Arabic-Indic digits are not accepted
        assert!(!is_all_decimal_digits("١٢٣"));
        // Full-width digits neither
        assert!(!is_all_decimal_digits("１２３"));
    }

    #[test]
    fn test_is_all_of() {
        assert!(is_all_of("XK9", "0123456789XK"));
        assert!(!is_all_of("XKZ", "0123456789XK"));
        assert!(is_all_of("", "abc"));
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("409").unwrap(), vec![4, 0, 9]);
        assert_eq!(parse_digits("4O9"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_split_groups_handles_multibyte() {
        assert_eq!(split_groups("éé1", &[1, 1]), vec!["é", "é", "1"]);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("54362315K"), 9);
        assert_eq!(char_len("5436231é"), 8);
        assert_eq!(char_len("１２３"), 3);
    }

    #[test]
    fn test_split_tail() {
        assert_eq!(split_tail("54362315K", 1), ("54362315", "K"));
        assert_eq!(split_tail("", 1), ("", ""));
        assert_eq!(split_tail("ab", 5), ("", "ab"));
    }

    #[test]
    fn test_group_from_right() {
        assert_eq!(group_from_right("", 3, "."), "");
        assert_eq!(group_from_right("12", 3, "."), "12");
    }
}
