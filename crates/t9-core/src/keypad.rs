//! Telephone keypad encoding.
//!
//! Maps lowercase ASCII letters onto the digit keys `2`..`9`:
//! 2=abc, 3=def, 4=ghi, 5=jkl, 6=mno, 7=pqrs, 8=tuv, 9=wxyz.
//! Keys `0`, `1`, `*` and `#` carry no letters and never appear in an
//! encoded sequence.

/// Number of letter-bearing keys (`2`..=`9`).
pub const KEY_COUNT: usize = 8;

/// Encode a single lowercase letter to its key digit.
///
/// Only `a`..=`z` is meaningful; use [`try_encode_char`] when the input is
/// not already known to be clean.
pub fn encode_char(letter: char) -> char {
    debug_assert!(letter.is_ascii_lowercase(), "not a lowercase letter: {letter:?}");
    let mut i = (letter as u32).wrapping_sub('a' as u32);
    // Key 7 holds four letters; shift everything after 'r' back by one so the
    // remaining keys line up on multiples of three again.
    if i > 17 {
        i -= 1;
    }
    i /= 3;
    // Key 1 has no letters.
    if i < 8 {
        i += 1;
    }
    char::from_digit(i + 1, 10).unwrap_or('9')
}

/// Encode a single letter, rejecting anything outside `a`..=`z`.
pub fn try_encode_char(letter: char) -> Option<char> {
    letter.is_ascii_lowercase().then(|| encode_char(letter))
}

/// Encode a word to its key digit sequence, one digit per letter.
pub fn encode_word(word: &str) -> String {
    word.chars().map(encode_char).collect()
}

/// Encode a word, returning the first character that is not a lowercase
/// ASCII letter on failure.
pub fn try_encode_word(word: &str) -> Result<String, char> {
    word.chars()
        .map(|c| try_encode_char(c).ok_or(c))
        .collect()
}

/// Whether `c` is a letter-bearing key (`2`..=`9`).
pub fn is_key_digit(c: char) -> bool {
    ('2'..='9').contains(&c)
}

/// Slot index (0..8) for a key digit, or `None` for any other character.
pub(crate) fn digit_slot(c: char) -> Option<usize> {
    if is_key_digit(c) {
        Some(c as usize - '2' as usize)
    } else {
        None
    }
}

/// Child slot per letter of `word`, or the first character that is not a
/// lowercase ASCII letter.
pub(crate) fn key_slots(word: &str) -> Result<Vec<usize>, char> {
    word.chars()
        .map(|c| try_encode_char(c).and_then(digit_slot).ok_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: [(char, &str); KEY_COUNT] = [
        ('2', "abc"),
        ('3', "def"),
        ('4', "ghi"),
        ('5', "jkl"),
        ('6', "mno"),
        ('7', "pqrs"),
        ('8', "tuv"),
        ('9', "wxyz"),
    ];

    #[test]
    fn test_full_layout() {
        for (digit, letters) in LAYOUT {
            for letter in letters.chars() {
                assert_eq!(encode_char(letter), digit, "letter {letter}");
            }
        }
    }

    #[test]
    fn test_every_letter_has_one_digit() {
        let covered: usize = LAYOUT.iter().map(|(_, l)| l.len()).sum();
        assert_eq!(covered, 26);
        for letter in 'a'..='z' {
            assert!(is_key_digit(encode_char(letter)));
        }
    }

    #[test]
    fn test_key_seven_boundary() {
        assert_eq!(encode_char('r'), '7');
        assert_eq!(encode_char('s'), '7');
        assert_eq!(encode_char('t'), '8');
        assert_eq!(encode_char('z'), '9');
    }

    #[test]
    fn test_encode_word() {
        assert_eq!(encode_word("good"), "4663");
        assert_eq!(encode_word("home"), "4663");
        assert_eq!(encode_word("gone"), "4663");
        assert_eq!(encode_word("cat"), "228");
        assert_eq!(encode_word(""), "");
    }

    #[test]
    fn test_try_encode_word_rejects() {
        assert_eq!(try_encode_word("hello"), Ok("43556".to_string()));
        assert_eq!(try_encode_word("don't"), Err('\''));
        assert_eq!(try_encode_word("Cat"), Err('C'));
        assert_eq!(try_encode_word("caf\u{e9}"), Err('\u{e9}'));
    }

    #[test]
    fn test_digit_slot() {
        assert_eq!(digit_slot('2'), Some(0));
        assert_eq!(digit_slot('9'), Some(7));
        assert_eq!(digit_slot('0'), None);
        assert_eq!(digit_slot('1'), None);
        assert_eq!(digit_slot('*'), None);
    }

    #[test]
    fn test_key_slots() {
        assert_eq!(key_slots("cat"), Ok(vec![0, 0, 6]));
        assert_eq!(key_slots("zoo"), Ok(vec![7, 4, 4]));
        assert_eq!(key_slots(""), Ok(vec![]));
        assert_eq!(key_slots("a-b"), Err('-'));
    }
}
