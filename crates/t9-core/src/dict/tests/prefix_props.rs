//! Property tests for prefix completeness of the candidate index.

use proptest::prelude::*;

use crate::dict::CandidateIndex;
use crate::keypad::encode_word;

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 1..40)
}

proptest! {
    #[test]
    fn every_word_found_at_full_encoding(words in arb_words()) {
        let index = CandidateIndex::build(words.clone()).unwrap();
        for w in &words {
            prop_assert!(index.lookup(&encode_word(w)).contains(&w.as_str()));
        }
    }

    #[test]
    fn every_word_found_at_every_prefix(words in arb_words()) {
        let index = CandidateIndex::build(words.clone()).unwrap();
        for w in &words {
            let digits = encode_word(w);
            for end in 1..=digits.len() {
                prop_assert!(
                    index.lookup(&digits[..end]).contains(&w.as_str()),
                    "{w} missing at prefix {}", &digits[..end]
                );
            }
        }
    }

    #[test]
    fn lookup_matches_linear_scan(words in arb_words(), query in "[2-9]{1,5}") {
        let index = CandidateIndex::build(words.clone()).unwrap();
        let expected: Vec<&str> = words
            .iter()
            .filter(|w| encode_word(w).starts_with(&query))
            .map(String::as_str)
            .collect();
        prop_assert_eq!(index.lookup(&query), expected);
    }

    #[test]
    fn terminal_count_equals_total_letters(words in arb_words()) {
        let index = CandidateIndex::build(words.clone()).unwrap();
        let letters: usize = words.iter().map(String::len).sum();
        prop_assert_eq!(index.stats().terminals, letters);
    }
}
