pub mod capitalize;
pub mod dictionary;
pub mod sampler;
pub mod wordlist;

pub use capitalize::Capitalization;
pub use dictionary::{Dictionary, DictionaryError, Passphrase, MIN_ENTROPY};
pub use wordlist::{get_dictionary, get_wordlist, languages};
