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

//! Word store sorted by length, with min/max length filtering, entropy
//! accounting and random passphrase sampling.

use crate::capitalize::Capitalization;
use crate::sampler::uniform_index;
use rand_core::{CryptoRng, OsRng, RngCore};
use std::fmt;
use thiserror::Error;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Minimum number of bits of entropy a passphrase must reach.
pub const MIN_ENTROPY: f64 = 30.0;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary cannot reach the minimum of {floor:.0} bits of entropy")]
    InsufficientEntropy { floor: f64 },

    #[error("cannot generate random words: {0}")]
    RandomSourceFailure(#[from] rand_core::Error),

    #[error("cannot sample from an empty word range")]
    EmptyRange,
}

/// A word list kept sorted by word length.
///
/// `start..stop` is the active range: the words satisfying the current
/// minimum and maximum length.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    capitalization: Capitalization,
    min_word_length: i64,
    max_word_length: i64,
    start: usize,
    stop: usize,
}

fn word_length(word: &str) -> usize {
    word.chars().count()
}

fn clean_line(line: &str) -> Option<String> {
    let word = match line.find('#') {
        Some(0) => return None,
        Some(i) => line[..i].trim(),
        None => line.trim(),
    };

    if word.is_empty() {
        None
    } else {
        Some(word.nfc().collect())
    }
}

impl Dictionary {
    /// Builds a dictionary from a word list, one word per line.
    ///
    /// `#` starts a comment that runs to the end of the line; surrounding
    /// whitespace and blank lines are ignored. Equal-length words keep their
    /// input order.
    pub fn from_text(text: &str) -> Self {
        let mut words: Vec<String> = text.lines().filter_map(clean_line).collect();
        words.sort_by_cached_key(|w| word_length(w));

        let min_word_length = words.first().map_or(0, |w| word_length(w) as i64);
        let max_word_length = words.last().map_or(0, |w| word_length(w) as i64);

        let mut dictionary = Self {
            start: 0,
            stop: words.len(),
            words,
            capitalization: Capitalization::None,
            min_word_length,
            max_word_length,
        };
        dictionary.update_start();
        dictionary.update_stop();

        debug!(
            words = dictionary.words.len(),
            min_word_length, max_word_length, "loaded word list"
        );

        dictionary
    }

    pub fn capitalization(&self) -> Capitalization {
        self.capitalization
    }

    pub fn set_capitalization(&mut self, capitalization: Capitalization) {
        self.capitalization = capitalization;
    }

    /// Sets the capitalization mode by name, falling back to `none`.
    pub fn set_capitalize(&mut self, mode: &str) {
        self.set_capitalization(Capitalization::from_setting(mode));
    }

    pub fn min_word_length(&self) -> i64 {
        self.min_word_length
    }

    /// Excludes words shorter than `n`. Values of 0 or less mean no limit.
    pub fn set_min_word_length(&mut self, n: i64) {
        self.min_word_length = n;
        self.update_start();
    }

    pub fn max_word_length(&self) -> i64 {
        self.max_word_length
    }

    /// Excludes words longer than `n`. Values of 0 or less mean no limit.
    pub fn set_max_word_length(&mut self, n: i64) {
        self.max_word_length = n;
        self.update_stop();
    }

    fn update_start(&mut self) {
        self.start = if self.min_word_length <= 0 {
            0
        } else {
            let min = self.min_word_length as usize;
            self.words.partition_point(|w| word_length(w) < min)
        };
        debug!(start = self.start, stop = self.stop, "active range updated");
    }

    fn update_stop(&mut self) {
        self.stop = if self.max_word_length <= 0 {
            self.words.len()
        } else {
            let max = self.max_word_length as usize;
            self.words.partition_point(|w| word_length(w) <= max)
        };
        debug!(start = self.start, stop = self.stop, "active range updated");
    }

    /// Number of words in the active range.
    pub fn len(&self) -> usize {
        if self.start >= self.words.len() || self.stop == 0 {
            return 0;
        }
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of words loaded, ignoring length limits.
    pub fn total_len(&self) -> usize {
        self.words.len()
    }

    /// Returns the word at `idx` within the active range, or `None` when
    /// `idx` is negative or past the end of the range.
    pub fn word(&self, idx: isize) -> Option<&str> {
        let idx = usize::try_from(idx).ok()?;
        let pos = self.start.checked_add(idx)?;
        if pos >= self.stop {
            return None;
        }
        self.words.get(pos).map(String::as_str)
    }

    /// Bits of entropy in a passphrase of `n` words from the active range.
    pub fn entropy(&self, n: usize) -> f64 {
        n as f64 * (self.len() as f64).log2()
    }

    /// Generates a passphrase of `n` words using the operating system's
    /// random source.
    pub fn passphrase(&self, n: usize) -> Result<Passphrase, DictionaryError> {
        self.passphrase_with_rng(n, &mut OsRng)
    }

    /// Generates a passphrase of `n` words drawn with replacement from the
    /// active range.
    ///
    /// Fails without drawing anything if the passphrase would fall below
    /// [`MIN_ENTROPY`]. Any random source failure discards the words drawn
    /// so far.
    pub fn passphrase_with_rng<R>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Passphrase, DictionaryError>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        let entropy = self.entropy(n);
        // NaN (zero words from an empty range) must fail too.
        if !(entropy >= MIN_ENTROPY) {
            return Err(DictionaryError::InsufficientEntropy { floor: MIN_ENTROPY });
        }

        debug!(
            words = n,
            entropy,
            capitalization = %self.capitalization,
            "generating passphrase"
        );

        let active = self.words.get(self.start..self.stop).unwrap_or_default();
        let mut words = Zeroizing::new(Vec::new());
        for _ in 0..n {
            let index = uniform_index(rng, active.len())?;
            words.push(self.capitalization.apply(&active[index], rng)?);
        }

        Ok(Passphrase { words })
    }
}

/// Words of one generated passphrase. Wiped from memory on drop.
pub struct Passphrase {
    words: Zeroizing<Vec<String>>,
}

impl Passphrase {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn join(&self, separator: &str) -> Zeroizing<String> {
        Zeroizing::new(self.words.join(separator))
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
