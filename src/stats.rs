//! Word, sentence and paragraph counts over (preferably normalized) text.
//!
//! Empty or whitespace-only input counts as zero everywhere.
use crate::unicode::{is_persian_digit, is_western_digit};
use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph separator must be a valid regex"));

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: count_words(text),
            sentences: count_sentences(text),
            paragraphs: count_paragraphs(text),
        }
    }
}

/// Whitespace-separated tokens. Attached punctuation is part of its token,
/// and a ZWNJ-joined word (`کتاب‌ها`) is one token.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[inline(always)]
const fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{061F}')
}

#[inline(always)]
const fn is_decimal_digit(c: char) -> bool {
    is_western_digit(c) || is_persian_digit(c)
}

/// Fragments between runs of `. ! ? ؟` that contain something other than
/// whitespace. A `.` between two digits is a decimal point, not a break.
///
/// Non-blank text always counts as at least one sentence, even when it is
/// made of terminators only (`...`).
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut has_content = false;
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let decimal_point = c == '.'
            && prev.is_some_and(is_decimal_digit)
            && chars.peek().is_some_and(|&n| is_decimal_digit(n));

        if is_sentence_terminator(c) && !decimal_point {
            if has_content {
                count += 1;
            }
            has_content = false;
        } else if !c.is_whitespace() {
            has_content = true;
        }
        prev = Some(c);
    }

    if has_content {
        count += 1;
    }
    if count == 0 && !text.trim().is_empty() {
        return 1;
    }
    count
}

/// Blocks separated by one or more blank lines.
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_SEPARATOR
        .split(text.trim())
        .filter(|p| !p.trim().is_empty())
        .count()
}
