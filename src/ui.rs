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

use anyhow::{Context, Result};
use console::{Style, Term};
use std::io::Write;
use xkcdpwd::{Dictionary, Passphrase, MIN_ENTROPY};

/// Bits of entropy in the four-word passphrase from XKCD #936.
pub const MIN_SAFE_ENTROPY: f64 = 44.0;
pub const STRONG_ENTROPY: f64 = 64.0;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
}

impl DisplayOptions {
    pub fn detect() -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stderr)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("\u{2713}", "!")
    } else {
        ("+", "!")
    }
}

pub fn get_tree_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("\u{251c}\u{2500}", "\u{2514}\u{2500}")
    } else {
        ("|-", "`-")
    }
}

pub fn strength_label(entropy: f64) -> &'static str {
    if entropy >= STRONG_ENTROPY {
        "Strong"
    } else if entropy >= MIN_SAFE_ENTROPY {
        "Good"
    } else if entropy >= MIN_ENTROPY {
        "Weak"
    } else {
        "Insufficient"
    }
}

/// Writes one passphrase per line, words joined by `separator`.
pub fn write_passphrase<W: Write>(
    out: &mut W,
    passphrase: &Passphrase,
    separator: &str,
) -> Result<()> {
    writeln!(out, "{}", &*passphrase.join(separator)).context("Failed to write passphrase")
}

/// Prints the entropy summary for the current dictionary settings to stderr.
pub fn display_entropy(
    dictionary: &Dictionary,
    word_count: usize,
    options: &DisplayOptions,
) -> Result<()> {
    let term = Term::stderr();
    for line in entropy_report(dictionary, word_count, options) {
        term.write_line(&line)?;
    }
    Ok(())
}

fn entropy_report(
    dictionary: &Dictionary,
    word_count: usize,
    options: &DisplayOptions,
) -> Vec<String> {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = get_tree_symbols(options.unicode_support);

    let words = dictionary.len();
    let per_word = if words > 0 { (words as f64).log2() } else { 0.0 };
    let entropy = dictionary.entropy(word_count).max(0.0);
    let secure = entropy >= MIN_SAFE_ENTROPY;

    let style = if !options.color_support {
        Style::new()
    } else if secure {
        Style::new().green()
    } else {
        Style::new().yellow()
    };
    let status = if secure { check_ok } else { check_warn };

    let limit = |n: i64| {
        if n > 0 {
            n.to_string()
        } else {
            "none".to_string()
        }
    };

    vec![
        "Stats:".to_string(),
        format!(
            "  {} Wordlist   {} of {} {}",
            branch,
            words,
            dictionary.total_len(),
            if dictionary.total_len() == 1 { "word" } else { "words" }
        ),
        format!(
            "  {} Length     min {}, max {}",
            branch,
            limit(dictionary.min_word_length()),
            limit(dictionary.max_word_length())
        ),
        format!("  {} Case       {}", branch, dictionary.capitalization()),
        format!("  {} Per word   {:.1} bits", branch, per_word),
        format!(
            "  {} Entropy    {} {} bits ({})",
            last,
            style.apply_to(format!("[{}]", status)),
            style.apply_to(format!("{:.1}", entropy)),
            style.apply_to(strength_label(entropy))
        ),
    ]
}
