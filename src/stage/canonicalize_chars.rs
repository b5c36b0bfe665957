use crate::{
    stage::{Stage, StageError, apply_rewrite},
    unicode::ELLIPSIS,
};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use phf::phf_map;
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Arabic-script variants and their Persian-orthography equivalents.
///
/// | Source | Target | Note |
/// |--------|--------|------|
/// | `ك` U+0643 | `ک` U+06A9 | Arabic kaf → keheh |
/// | `ي` U+064A, `ى` U+0649 | `ی` U+06CC | Arabic yeh / alef maksura → Farsi yeh |
/// | `أ` `إ` `ٱ` | `ا` | hamza/wasla alef → bare alef |
/// | `ة` U+0629 | `ه` U+0647 | teh marbuta → heh |
/// | `٠`–`٩` | `۰`–`۹` | Arabic-Indic → Persian digits |
/// | `﴾` `﴿` | `(` `)` | ornate parentheses |
static CHARACTER_MAP: phf::Map<char, &'static str> = phf_map! {
    '\u{0643}' => "\u{06A9}",
    '\u{064A}' => "\u{06CC}",
    '\u{0649}' => "\u{06CC}",
    '\u{0623}' => "\u{0627}",
    '\u{0625}' => "\u{0627}",
    '\u{0671}' => "\u{0627}",
    '\u{0629}' => "\u{0647}",
    '\u{0660}' => "\u{06F0}",
    '\u{0661}' => "\u{06F1}",
    '\u{0662}' => "\u{06F2}",
    '\u{0663}' => "\u{06F3}",
    '\u{0664}' => "\u{06F4}",
    '\u{0665}' => "\u{06F5}",
    '\u{0666}' => "\u{06F6}",
    '\u{0667}' => "\u{06F7}",
    '\u{0668}' => "\u{06F8}",
    '\u{0669}' => "\u{06F9}",
    '\u{FD3E}' => "(",
    '\u{FD3F}' => ")",
};

/// Hamza folding: `ئ` → `ی`, standalone `ء` is dropped.
static HAMZA_MAP: phf::Map<char, &'static str> = phf_map! {
    '\u{0626}' => "\u{06CC}",
    '\u{0621}' => "",
};

/// Upper bound on map/NFKC rounds; two always suffice for real input.
const MAX_ROUNDS: usize = 3;

/// Fold Arabic-script variants to Persian orthography, then apply Unicode
/// NFKC.
///
/// The substitution runs first so script-specific letters are canonical
/// before the generic compatibility fold. NFKC can in turn surface letters
/// the map folds (presentation forms such as `ﻙ` decompose to Arabic `ك`),
/// so the map is re-applied until the text is stable. The ellipsis glyph `…`
/// is exempt from NFKC.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalizeChars {
    /// Fold `ئ` to `ی` and drop standalone `ء`.
    pub fold_hamza: bool,
}

/// Default canonicalization, hamza folded.
pub const CANONICALIZE_CHARS: CanonicalizeChars = CanonicalizeChars { fold_hamza: true };

/// Canonicalization that preserves `ئ` and `ء`.
pub const CANONICALIZE_CHARS_KEEP_HAMZA: CanonicalizeChars =
    CanonicalizeChars { fold_hamza: false };

impl Default for CanonicalizeChars {
    fn default() -> Self {
        CANONICALIZE_CHARS
    }
}

/// Free-function form of [`CANONICALIZE_CHARS`].
pub fn canonicalize_chars(text: &str) -> Cow<'_, str> {
    CANONICALIZE_CHARS.canonicalize(text)
}

impl CanonicalizeChars {
    #[inline(always)]
    fn lookup(&self, c: char) -> Option<&'static str> {
        CHARACTER_MAP.get(&c).copied().or_else(|| {
            if self.fold_hamza {
                HAMZA_MAP.get(&c).copied()
            } else {
                None
            }
        })
    }

    fn map_chars<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(first) = text
            .char_indices()
            .find_map(|(i, c)| self.lookup(c).map(|_| i))
        else {
            return Cow::Borrowed(text);
        };

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..first]);
        for c in text[first..].chars() {
            match self.lookup(c) {
                Some(to) => out.push_str(to),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }

    pub fn canonicalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = self.map_chars(text);
        for _ in 0..MAX_ROUNDS {
            if nfkc_is_normalized(&current) {
                break;
            }
            let folded = nfkc_keep_ellipsis(&current);
            let remapped = match self.map_chars(&folded) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            current = Cow::Owned(remapped.unwrap_or(folded));
        }
        current
    }
}

#[inline]
fn nfkc_is_normalized(text: &str) -> bool {
    text.split(ELLIPSIS).all(|part| ICU4X_NFKC.is_normalized(part))
}

fn nfkc_keep_ellipsis(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, part) in text.split(ELLIPSIS).enumerate() {
        if i > 0 {
            out.push(ELLIPSIS);
        }
        out.push_str(&ICU4X_NFKC.normalize(part));
    }
    out
}

impl Stage for CanonicalizeChars {
    fn name(&self) -> &'static str {
        "canonicalize_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(|c| self.lookup(c).is_some()) || !nfkc_is_normalized(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, |s| self.canonicalize(s)))
    }
}

#[cfg(test)]
impl StageTestConfig for CanonicalizeChars {
    fn samples() -> &'static [&'static str] {
        &["كتاب عربي", "ﻙﺘﺎﺏ", "٠١٢٣", "ﬁle", "a…b", "杜甫 Dù Fǔ", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",
            "سلام خوبی؟ چکار میکنی",
            "۰۱۲۳۴۵۶۷۸۹",
            "صبر کن… تمام",
            "\u{200C}",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("كتاب عربي", "کتاب عربی"),
            ("ای کاش أینطور نبود.", "ای کاش اینطور نبود."),
            ("٠١٢٣٤٥٦٧٨٩", "۰۱۲۳۴۵۶۷۸۹"),
            ("مدرسة", "مدرسه"),
            ("ﻙ", "ک"),
            ("ﬁ…", "fi…"),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use unicode_normalization::UnicodeNormalization;

    #[test]
    fn hamza_folding_is_configurable() {
        assert_eq!(canonicalize_chars("مسئله"), "مسیله");
        assert_eq!(canonicalize_chars("جزء"), "جز");
        assert_eq!(CANONICALIZE_CHARS_KEEP_HAMZA.canonicalize("مسئله"), "مسئله");
        assert_eq!(CANONICALIZE_CHARS_KEEP_HAMZA.canonicalize("جزء"), "جزء");
    }

    #[test]
    fn non_arabic_scripts_untouched() {
        let input = "杜甫 Dù Fǔ";
        assert!(matches!(canonicalize_chars(input), Cow::Borrowed(_)));
    }

    #[test]
    fn presentation_forms_reach_persian_letters() {
        // isolated/final kaf and yeh presentation forms
        assert_eq!(canonicalize_chars("\u{FED9}\u{FEF2}"), "کی");
        assert_eq!(canonicalize_chars("ﷲ"), "الله");
    }

    #[test]
    fn decomposed_hamza_alef_is_folded() {
        // alef + combining hamza above composes to `أ` under NFKC
        assert_eq!(canonicalize_chars("\u{0627}\u{0654}"), "ا");
    }

    #[test]
    fn ellipsis_glyph_survives() {
        assert_eq!(canonicalize_chars("صبر…"), "صبر…");
        assert_eq!(canonicalize_chars("ﬁ…ﬁ"), "fi…fi");
    }

    #[test]
    fn agrees_with_reference_nfkc_outside_the_map() {
        for input in ["ﬀﬁ ½ ①", "Ｈｅｌｌｏ", "café", "㎏"] {
            let reference: String = input.nfkc().collect();
            assert_eq!(canonicalize_chars(input), reference);
        }
    }

    #[test]
    fn idempotent_on_mixed_input() {
        let input = "ﻙ ك ي ة أ ٣ ﬁ ءئ … ﴾x﴿";
        let once = canonicalize_chars(input).into_owned();
        assert_eq!(canonicalize_chars(&once), once);
    }
}
