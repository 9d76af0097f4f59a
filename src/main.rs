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

mod config;
mod ui;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[derive(Parser)]
#[command(
    name = "xkcdpwd",
    version,
    author,
    about = "A passphrase generator based on XKCD comic #936"
)]
struct Cli {
    /// Language of the word list
    #[arg(short, long, env = "XKCDPWD_LANGUAGE")]
    language: Option<String>,

    /// Number of words per passphrase [default: 4]
    #[arg(short, long, env = "XKCDPWD_WORDS")]
    words: Option<usize>,

    /// Number of passphrases to generate [default: 10]
    #[arg(short = 'n', long, env = "XKCDPWD_PASSPHRASES")]
    passphrases: Option<usize>,

    /// Capitalization: none, first, all or random [default: none]
    #[arg(short, long, env = "XKCDPWD_CAPITALIZE")]
    capitalize: Option<String>,

    /// Separator between words: nothing, or one space or punctuation character [default: " "]
    #[arg(short, long, allow_hyphen_values = true, env = "XKCDPWD_SEPARATOR")]
    separator: Option<String>,

    /// Shortest word to use (0 for no limit)
    #[arg(long, allow_negative_numbers = true, env = "XKCDPWD_MIN_LENGTH")]
    min_length: Option<i64>,

    /// Longest word to use (0 for no limit)
    #[arg(long, allow_negative_numbers = true, env = "XKCDPWD_MAX_LENGTH")]
    max_length: Option<i64>,

    /// Config file [default: <config dir>/xkcdpwd/xkcdpwd.toml]
    #[arg(long, env = "XKCDPWD_CONFIG")]
    config: Option<PathBuf>,

    /// Print an entropy summary to stderr
    #[arg(short, long)]
    entropy: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> config::FileConfig {
        config::FileConfig {
            language: self.language.clone(),
            words: self.words,
            passphrases: self.passphrases,
            capitalize: self.capitalize.clone(),
            separator: self.separator.clone(),
            min_length: self.min_length,
            max_length: self.max_length,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = config::load(cli.config.as_deref())?;
    let settings = config::Settings::try_from(file_config.merge(cli.overrides()))?;
    info!(
        language = %settings.language,
        words = settings.words,
        passphrases = settings.passphrases,
        "resolved settings"
    );

    let mut dictionary = xkcdpwd::get_dictionary(&settings.language)
        .with_context(|| format!("no dictionary found for language \"{}\"", settings.language))?;
    dictionary.set_min_word_length(settings.min_length);
    dictionary.set_max_word_length(settings.max_length);
    dictionary.set_capitalization(settings.capitalization);

    if cli.entropy {
        ui::display_entropy(&dictionary, settings.words, &ui::DisplayOptions::detect())?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..settings.passphrases {
        let passphrase = dictionary.passphrase(settings.words)?;
        ui::write_passphrase(&mut out, &passphrase, &settings.separator)?;
    }
    out.flush()?;

    Ok(())
}
