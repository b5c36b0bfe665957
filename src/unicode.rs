//! Character classes shared by the normalization stages.
//!
//! Everything here is a `const fn` over a handful of code points, so the
//! stages can call them per character without table lookups.

/// Zero-width non-joiner (نیم‌فاصله). Joins a word to a bound suffix
/// without a visible space.
pub const ZWNJ: char = '\u{200C}';

/// Horizontal ellipsis glyph produced by `StandardizeEllipsis`.
pub const ELLIPSIS: char = '\u{2026}';

/// Directional opening quotation mark (گیومه باز).
pub const OPEN_QUOTE: char = '«';

/// Directional closing quotation mark (گیومه بسته).
pub const CLOSE_QUOTE: char = '»';

/// Punctuation that must hug the preceding word: `? ! ؟ ٪ ؛ ، . :`.
///
/// Kept as a string so it can be spliced (escaped) into a regex class.
pub const CLOSING_PUNCTUATION: &str = "?!\u{061F}\u{066A}\u{061B}\u{060C}.:";

/// Closing marks that may directly follow closing punctuation without a
/// space in between.
pub const CLOSING_MARKS: &str = "\"\u{00BB})]}";

/// Separator accepted between a word and a bound suffix.
#[inline(always)]
pub const fn is_suffix_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '_')
}

/// Word character for suffix boundaries.
///
/// Unlike `regex`'s `\w`, the ZWNJ is *not* a word character here, so a
/// suffix that is already followed by a joined suffix still ends a word
/// (`ترین‌ها`).
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[inline(always)]
pub const fn is_western_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline(always)]
pub const fn is_persian_digit(c: char) -> bool {
    matches!(c, '\u{06F0}'..='\u{06F9}')
}
