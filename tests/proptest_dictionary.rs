// This file is part of xkcdpwd.
//
// Copyright (c) 2025  The xkcdpwd Developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use proptest::prelude::*;

use xkcdpwd::{Capitalization, Dictionary, DictionaryError, MIN_ENTROPY};

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 0..64)
}

fn lengths(d: &Dictionary) -> Vec<usize> {
    (0..d.len() as isize)
        .map(|i| d.word(i).unwrap().chars().count())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn loaded_words_sorted_by_length(words in word_list()) {
        let d = Dictionary::from_text(&words.join("\n"));
        prop_assert_eq!(d.total_len(), words.len());
        prop_assert_eq!(d.len(), words.len());

        let lengths = lengths(&d);
        prop_assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn equal_lengths_keep_input_order(words in word_list()) {
        let d = Dictionary::from_text(&words.join("\n"));
        let mut expected = words.clone();
        expected.sort_by_key(|w| w.len());

        let loaded: Vec<&str> = (0..d.len() as isize).map(|i| d.word(i).unwrap()).collect();
        prop_assert_eq!(loaded, expected);
    }

    #[test]
    fn comments_and_blanks_contribute_nothing(
        words in word_list(),
        comment in "[ a-z]{0,10}",
        padding in "[ \t]{0,4}",
    ) {
        let mut text = String::new();
        for word in &words {
            text.push_str(&format!("{padding}{word}{padding}# {comment}\n#{comment}\n{padding}\n"));
        }

        let d = Dictionary::from_text(&text);
        prop_assert_eq!(d.total_len(), words.len());
    }

    #[test]
    fn filter_bounds_hold(words in word_list(), min in -3i64..15, max in -3i64..15) {
        let mut d = Dictionary::from_text(&words.join("\n"));
        d.set_min_word_length(min);
        d.set_max_word_length(max);

        let expected = words
            .iter()
            .filter(|w| min <= 0 || w.len() as i64 >= min)
            .filter(|w| max <= 0 || w.len() as i64 <= max)
            .count();
        prop_assert_eq!(d.len(), expected);

        for len in lengths(&d) {
            prop_assert!(min <= 0 || len as i64 >= min);
            prop_assert!(max <= 0 || len as i64 <= max);
        }
    }

    #[test]
    fn word_outside_range_is_none(words in word_list(), idx in -100isize..100) {
        let d = Dictionary::from_text(&words.join("\n"));
        let inside = idx >= 0 && (idx as usize) < d.len();
        prop_assert_eq!(d.word(idx).is_some(), inside);
    }

    #[test]
    fn passphrase_respects_entropy_floor(words in word_list(), n in 0usize..12) {
        let mut d = Dictionary::from_text(&words.join("\n"));
        d.set_capitalize("random");

        match d.passphrase(n) {
            Ok(p) => {
                prop_assert!(d.entropy(n) >= MIN_ENTROPY);
                prop_assert_eq!(p.len(), n);
                for word in p.words() {
                    let lower = word.to_lowercase();
                    prop_assert!(words.contains(&lower));
                }
            }
            Err(DictionaryError::InsufficientEntropy { floor }) => {
                prop_assert_eq!(floor, MIN_ENTROPY);
                prop_assert!(!(d.entropy(n) >= MIN_ENTROPY));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn unknown_capitalization_is_none(mode in "[a-z]{0,8}") {
        prop_assume!(!Capitalization::NAMES.contains(&mode.as_str()));
        prop_assert_eq!(Capitalization::from_setting(&mode), Capitalization::None);
    }
}
