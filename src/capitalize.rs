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

use crate::dictionary::DictionaryError;
use crate::sampler::uniform_index;
use rand_core::{CryptoRng, RngCore};
use std::fmt;

/// Outcomes drawn per character in [`Capitalization::Random`] mode.
const RANDOM_CASE_OUTCOMES: usize = 9;

/// Draws below this value uppercase the character (5 in 9).
const RANDOM_CASE_UPPER: usize = 5;

/// How sampled words are capitalized before output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capitalization {
    #[default]
    None,
    First,
    All,
    Random,
}

impl Capitalization {
    pub const NAMES: [&'static str; 4] = ["none", "first", "all", "random"];

    /// Parses a mode name. Anything unrecognized becomes [`Capitalization::None`].
    pub fn from_setting(s: &str) -> Self {
        match s {
            "first" => Self::First,
            "all" => Self::All,
            "random" => Self::Random,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::First => "first",
            Self::All => "all",
            Self::Random => "random",
        }
    }

    /// Returns `word` capitalized according to this mode.
    ///
    /// [`Capitalization::Random`] draws one value per character, so a failing
    /// random source aborts the call.
    pub fn apply<R>(self, word: &str, rng: &mut R) -> Result<String, DictionaryError>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        match self {
            Self::None => Ok(word.to_owned()),
            Self::All => Ok(word.to_uppercase()),
            Self::First => {
                let mut chars = word.chars();
                Ok(match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                })
            }
            Self::Random => {
                let mut capitalized = String::with_capacity(word.len());
                for ch in word.chars() {
                    if uniform_index(rng, RANDOM_CASE_OUTCOMES)? < RANDOM_CASE_UPPER {
                        capitalized.extend(ch.to_uppercase());
                    } else {
                        capitalized.push(ch);
                    }
                }
                Ok(capitalized)
            }
        }
    }
}

impl From<&str> for Capitalization {
    fn from(s: &str) -> Self {
        Self::from_setting(s)
    }
}

impl fmt::Display for Capitalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
