//! Persian text normalization and numeral conversion.
//!
//! ```
//! assert_eq!(farsinum::normalize("سلام    دنیا ."), "سلام دنیا.");
//! assert_eq!(farsinum::to_persian_digits("1404"), "۱۴۰۴");
//! assert_eq!(farsinum::to_words(128).unwrap(), "یکصد و بیست و هشت");
//! ```
pub mod digits;
pub mod normalizer;
pub mod pipeline;
pub mod stage;
pub mod stats;
pub mod unicode;
pub mod words;

#[cfg(test)]
mod testing {
    pub mod stage_contract;
}

use std::{borrow::Cow, sync::LazyLock};

pub use digits::{AsDigits, PersianDigits, WesternDigits, to_persian_digits, to_western_digits};
pub use normalizer::{NormalizeError, Normalizer, NormalizerBuilder};
pub use pipeline::Pipeline;
pub use stage::canonicalize_chars::{
    CANONICALIZE_CHARS, CANONICALIZE_CHARS_KEEP_HAMZA, CanonicalizeChars, canonicalize_chars,
};
pub use stage::clean_spacing::{CleanSpacing, clean_spacing};
pub use stage::join_suffixes::{JoinSuffixes, join_suffixes};
pub use stage::standardize_ellipsis::{StandardizeEllipsis, standardize_ellipsis};
pub use stage::standardize_quotes::{StandardizeQuotes, standardize_quotes};
pub use stage::unify_line_breaks::{UnifyLineBreaks, unify_line_breaks};
pub use stage::{Stage, StageError};
pub use stats::{TextStats, count_paragraphs, count_sentences, count_words};
pub use words::{MAX_MAGNITUDE, WordsError, parse_to_words, to_words};

static PERSIAN: LazyLock<Normalizer> = LazyLock::new(Normalizer::persian);

/// Run the default Persian pipeline over `text`.
pub fn normalize(text: &str) -> Cow<'_, str> {
    PERSIAN.normalize(text)
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
