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

use crate::dictionary::Dictionary;
use tracing::debug;

const EN_WORDLIST: &str = include_str!("../assets/en.txt");

#[cfg(test)]
const EN_EXPECTED_SHA256: &str = "7722d8efca286501cbf32c773e56580ed758a5ed41f0db915a3cf82e8582a201";

/// Bundled word lists keyed by primary language subtag.
static LANGUAGES: &[(&str, &str)] = &[("en", EN_WORDLIST)];

/// Primary subtag of a language tag, lowercased: `en-US` and `EN_gb` give `en`.
fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Raw bundled word list for `tag`, if one exists.
pub fn get_wordlist(tag: &str) -> Option<&'static str> {
    let primary = primary_subtag(tag);
    LANGUAGES
        .iter()
        .find(|(code, _)| *code == primary)
        .map(|(_, data)| *data)
}

/// Builds a fresh dictionary for `tag`. Unsupported languages give `None`.
pub fn get_dictionary(tag: &str) -> Option<Dictionary> {
    let Some(data) = get_wordlist(tag) else {
        debug!(language = tag, "no bundled word list");
        return None;
    };
    Some(Dictionary::from_text(data))
}

/// Language codes with a bundled word list.
pub fn languages() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(code, _)| *code)
}
