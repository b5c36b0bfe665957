use crate::{
    stage::{Stage, StageError, apply_rewrite},
    unicode::{ZWNJ, is_suffix_separator, is_word_char},
};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use std::borrow::Cow;

/// Plural suffix, joined first.
const PLURAL_SUFFIXES: &[&str] = &["ها"];

/// Comparative/superlative suffixes, longest first so `ترین` is never cut
/// down to `تر`.
const COMPARATIVE_SUFFIXES: &[&str] = &["ترین", "تر"];

/// Attach common bound suffixes (`ها`, `تر`, `ترین`) to the preceding word
/// with a ZWNJ.
///
/// A run of spaces, tabs or underscores is replaced by a single ZWNJ when
///
/// * the character before the run is not whitespace, and
/// * the run is followed by a suffix that ends at a word boundary (end of
///   text, punctuation, whitespace or a ZWNJ).
///
/// `کتاب ها` → `کتاب‌ها`, `خوب ترین ها` → `خوب‌ترین‌ها`, while `کتاب های`
/// and `بهترین` are left alone. Verb prefixes (`می`, `نمی`) are not joined:
/// without a verb lexicon the split is ambiguous.
#[derive(Debug, Default, Clone, Copy)]
pub struct JoinSuffixes;

/// Free-function form of [`JoinSuffixes`].
pub fn join_suffixes(text: &str) -> Cow<'_, str> {
    let plural = join_rule(text, PLURAL_SUFFIXES);
    let comparative = match join_rule(&plural, COMPARATIVE_SUFFIXES) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match comparative {
        Some(s) => Cow::Owned(s),
        None => plural,
    }
}

fn join_rule<'a>(text: &'a str, suffixes: &[&str]) -> Cow<'a, str> {
    let mut out: Option<String> = None;
    let mut copied = 0usize;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !is_suffix_separator(c) {
            prev = Some(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some((i, d)) = chars.next_if(|&(_, d)| is_suffix_separator(d)) {
            end = i + d.len_utf8();
        }
        let attached_to_word = prev.is_some_and(|p| !p.is_whitespace());
        prev = Some(c);

        if attached_to_word && starts_with_suffix(&text[end..], suffixes) {
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 3));
            buf.push_str(&text[copied..start]);
            buf.push(ZWNJ);
            copied = end;
        }
    }

    match out {
        None => Cow::Borrowed(text),
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
    }
}

#[inline]
fn starts_with_suffix(rest: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| {
        rest.strip_prefix(suffix)
            .is_some_and(|tail| tail.chars().next().is_none_or(|n| !is_word_char(n)))
    })
}

impl Stage for JoinSuffixes {
    fn name(&self) -> &'static str {
        "join_suffixes"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(matches!(join_suffixes(text), Cow::Owned(_)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, join_suffixes))
    }
}

#[cfg(test)]
impl StageTestConfig for JoinSuffixes {
    fn samples() -> &'static [&'static str] {
        &["کتاب ها", "کتاب های خوب", "بهترین", " ها", "a_ها", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("کتاب ها و دفتر ها", "کتاب\u{200C}ها و دفتر\u{200C}ها"),
            ("خوب تر است.", "خوب\u{200C}تر است."),
            ("کلمه ترین", "کلمه\u{200C}ترین"),
            ("خوب ترین ها", "خوب\u{200C}ترین\u{200C}ها"),
            ("کتاب_ها", "کتاب\u{200C}ها"),
            ("کتاب  \t ها!", "کتاب\u{200C}ها!"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(JoinSuffixes);
    }
}
