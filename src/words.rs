//! Signed integer → Persian words.
//!
//! The magnitude is split into base-1000 chunks from least to most
//! significant. Each non-zero chunk is spelled by `three_digit_words` and
//! suffixed with the scale word for its position; chunks are then joined,
//! most significant first, with the connective ` و `.
//!
//! ```
//! use farsinum::words::to_words;
//!
//! assert_eq!(to_words(1001).unwrap(), "یک هزار و یک");
//! assert_eq!(to_words(-42).unwrap(), "منفی چهل و دو");
//! ```

use crate::{digits::to_western_digits, stage::canonicalize_chars::canonicalize_chars};
use smallvec::SmallVec;
use std::num::IntErrorKind;
use thiserror::Error;
use tracing::debug;

pub const ZERO: &str = "صفر";
const NEGATIVE: &str = "منفی";
const AND: &str = " و ";

const UNITS: [&str; 10] = ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"];
const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];
const TENS: [&str; 10] = ["", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود"];
const HUNDREDS: [&str; 10] = [
    "", "یکصد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

/// Scale word per chunk position; position 0 has none.
pub const SCALES: [&str; 7] = [
    "",
    "هزار",
    "میلیون",
    "میلیارد",
    "تریلیون",
    "کوادریلیون",
    "کوینتیلیون",
];

/// Exclusive upper bound on the magnitude `to_words` accepts: 1000^7.
pub const MAX_MAGNITUDE: i128 = 1000i128.pow(SCALES.len() as u32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordsError {
    #[error("expected an integer, got `{input}`")]
    TypeMismatch { input: String },

    /// `value` saturates to `i128::MIN`/`i128::MAX` when the parsed literal
    /// does not even fit in an `i128`.
    #[error("{value} is out of range: magnitude must be below {limit}")]
    RangeExceeded { value: i128, limit: i128 },
}

/// Spell a signed integer in Persian words.
///
/// Fails with [`WordsError::RangeExceeded`] when `|n| >= MAX_MAGNITUDE`.
pub fn to_words(n: impl Into<i128>) -> Result<String, WordsError> {
    let value: i128 = n.into();
    if value == 0 {
        return Ok(ZERO.to_owned());
    }

    let magnitude = value.unsigned_abs();
    if magnitude >= MAX_MAGNITUDE as u128 {
        debug!(value = %value, limit = %MAX_MAGNITUDE, "number exceeds the largest scale word");
        return Err(WordsError::RangeExceeded {
            value,
            limit: MAX_MAGNITUDE,
        });
    }

    let mut chunks: SmallVec<[String; 7]> = SmallVec::new();
    let mut remaining = magnitude;
    for scale in SCALES {
        if remaining == 0 {
            break;
        }
        let chunk = (remaining % 1000) as usize;
        if chunk != 0 {
            let mut words = three_digit_words(chunk);
            if !scale.is_empty() {
                words.push(' ');
                words.push_str(scale);
            }
            chunks.push(words);
        }
        remaining /= 1000;
    }
    chunks.reverse();

    let body = chunks.join(AND);
    Ok(if value < 0 {
        format!("{NEGATIVE} {body}")
    } else {
        body
    })
}

/// Spell an integer given as text (`"-1250"`, `"۱۲۵۰"`, `"١٢٥٠"`).
///
/// Text that is not an optionally signed integer fails with
/// [`WordsError::TypeMismatch`].
pub fn parse_to_words(text: &str) -> Result<String, WordsError> {
    let canonical = canonicalize_chars(text.trim());
    let western = to_western_digits(&*canonical);
    let value = western.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => WordsError::RangeExceeded {
            value: i128::MAX,
            limit: MAX_MAGNITUDE,
        },
        IntErrorKind::NegOverflow => WordsError::RangeExceeded {
            value: i128::MIN,
            limit: MAX_MAGNITUDE,
        },
        _ => WordsError::TypeMismatch {
            input: text.to_owned(),
        },
    })?;
    to_words(value)
}

/// Spell `0..=999`; zero yields an empty string (a zero chunk is silent).
pub(crate) fn three_digit_words(n: usize) -> String {
    debug_assert!(n < 1000, "chunk out of range: {n}");
    let mut parts: SmallVec<[&str; 3]> = SmallVec::new();
    let (hundreds, rest) = (n / 100, n % 100);
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    match rest {
        0 => {}
        1..=9 => parts.push(UNITS[rest]),
        10..=19 => parts.push(TEENS[rest - 10]),
        _ => {
            parts.push(TENS[rest / 10]);
            if rest % 10 != 0 {
                parts.push(UNITS[rest % 10]);
            }
        }
    }
    parts.join(AND)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn simple_numbers() -> TestResult {
        assert_eq!(to_words(0)?, "صفر");
        assert_eq!(to_words(1)?, "یک");
        assert_eq!(to_words(10)?, "ده");
        assert_eq!(to_words(15)?, "پانزده");
        assert_eq!(to_words(20)?, "بیست");
        assert_eq!(to_words(21)?, "بیست و یک");
        assert_eq!(to_words(99)?, "نود و نه");
        Ok(())
    }

    #[test]
    fn hundreds() -> TestResult {
        assert_eq!(to_words(100)?, "یکصد");
        assert_eq!(to_words(101)?, "یکصد و یک");
        assert_eq!(to_words(128)?, "یکصد و بیست و هشت");
        assert_eq!(to_words(550)?, "پانصد و پنجاه");
        assert_eq!(to_words(999)?, "نهصد و نود و نه");
        Ok(())
    }

    #[test]
    fn thousands() -> TestResult {
        assert_eq!(to_words(1000)?, "یک هزار");
        assert_eq!(to_words(1001)?, "یک هزار و یک");
        assert_eq!(to_words(2500)?, "دو هزار و پانصد");
        assert_eq!(to_words(12345)?, "دوازده هزار و سیصد و چهل و پنج");
        assert_eq!(to_words(25000)?, "بیست و پنج هزار");
        assert_eq!(
            to_words(999_999)?,
            "نهصد و نود و نه هزار و نهصد و نود و نه"
        );
        Ok(())
    }

    #[test]
    fn millions_and_up() -> TestResult {
        assert_eq!(to_words(1_000_000)?, "یک میلیون");
        assert_eq!(to_words(2_500_000)?, "دو میلیون و پانصد هزار");
        assert_eq!(
            to_words(123_456_789)?,
            "یکصد و بیست و سه میلیون و چهارصد و پنجاه و شش هزار و هفتصد و هشتاد و نه"
        );
        assert_eq!(to_words(1_000_001_000u64)?, "یک میلیارد و یک هزار");
        assert_eq!(to_words(10i64.pow(18))?, "یک کوینتیلیون");
        Ok(())
    }

    #[test]
    fn negative_numbers() -> TestResult {
        assert_eq!(to_words(-1)?, "منفی یک");
        assert_eq!(to_words(-42)?, "منفی چهل و دو");
        assert_eq!(to_words(-128)?, "منفی یکصد و بیست و هشت");
        assert_eq!(to_words(-1_000_000)?, "منفی یک میلیون");
        Ok(())
    }

    #[test]
    fn range_boundary() {
        assert!(to_words(MAX_MAGNITUDE - 1).is_ok());
        assert_eq!(
            to_words(10i128.pow(21)),
            Err(WordsError::RangeExceeded {
                value: 10i128.pow(21),
                limit: MAX_MAGNITUDE
            })
        );
        assert!(matches!(
            to_words(-(10i128.pow(21))),
            Err(WordsError::RangeExceeded { .. })
        ));
        assert!(matches!(
            to_words(i128::MIN),
            Err(WordsError::RangeExceeded { .. })
        ));
        // every primitive up to 64 bits fits
        assert!(to_words(u64::MAX).is_ok());
        assert!(to_words(i64::MIN).is_ok());
    }

    #[test]
    fn parse_accepts_any_digit_block() -> TestResult {
        assert_eq!(parse_to_words("128")?, "یکصد و بیست و هشت");
        assert_eq!(parse_to_words("۱۲۸")?, "یکصد و بیست و هشت");
        assert_eq!(parse_to_words("١٢٨")?, "یکصد و بیست و هشت");
        assert_eq!(parse_to_words(" -۴۲ ")?, "منفی چهل و دو");
        Ok(())
    }

    #[test]
    fn parse_rejects_non_integers() {
        for input in ["12.5", "abc", "", "۱۲ ۳"] {
            assert_eq!(
                parse_to_words(input),
                Err(WordsError::TypeMismatch {
                    input: input.to_owned()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn parse_overflow_is_a_range_error() {
        let huge = "9".repeat(60);
        assert!(matches!(
            parse_to_words(&huge),
            Err(WordsError::RangeExceeded { value: i128::MAX, .. })
        ));
    }

    #[test]
    fn chunk_boundaries_never_overflow_the_lexicon() {
        // every chunk handed to `three_digit_words` is below 1000
        for n in [999i64, 1000, 999_999, 1_000_000, 1_000_999_000] {
            assert!(to_words(n).is_ok(), "{n}");
        }
        assert_eq!(to_words(1_000_999_000i64).unwrap(), "یک میلیارد و نهصد و نود و نه هزار");
    }

    #[test]
    fn three_digit_chunks() {
        assert_eq!(three_digit_words(0), "");
        assert_eq!(three_digit_words(7), "هفت");
        assert_eq!(three_digit_words(310), "سیصد و ده");
        assert_eq!(three_digit_words(470), "چهارصد و هفتاد");
    }

    #[test]
    fn lexicon_covers_every_chunk() {
        for n in 1..1000 {
            let words = three_digit_words(n);
            assert!(!words.is_empty(), "{n}");
            assert!(!words.contains("  "), "{n}: {words}");
            assert!(!words.starts_with(' ') && !words.ends_with(' '), "{n}");
        }
    }
}
