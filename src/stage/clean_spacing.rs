use crate::{
    stage::{Stage, StageError, apply_rewrite},
    unicode::{CLOSING_MARKS, CLOSING_PUNCTUATION},
};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Ordered spacing rules. Order is significant: punctuation spacing runs
/// before blank-line collapsing so it cannot rebuild multi-line whitespace
/// blocks, and ZWNJ cleanup runs last.
static RULES: LazyLock<[(Regex, &'static str); 6]> = LazyLock::new(|| {
    let rule = |pattern: &str, replacement| {
        (
            Regex::new(pattern).expect("spacing rule must be a valid regex"),
            replacement,
        )
    };
    let punct = regex::escape(CLOSING_PUNCTUATION);
    let marks = regex::escape(CLOSING_MARKS);
    [
        // runs of spaces/tabs → one space
        rule(r"[ \t]{2,}|\t", " "),
        // no whitespace before closing punctuation
        rule(&format!(r"\s+([{punct}])"), "${1}"),
        // one space after closing punctuation, unless whitespace, a digit,
        // more punctuation or a closing mark follows
        rule(&format!(r"([{punct}])([^\s\d{punct}{marks}])"), "${1} ${2}"),
        // 2+ line breaks (with any whitespace between) → one blank line
        rule(r"\n\s*\n", "\n\n"),
        // no whitespace touching a ZWNJ
        rule(r"\s+\x{200C}\s*|\x{200C}\s+", "\u{200C}"),
        // ZWNJ runs → one ZWNJ
        rule(r"\x{200C}{2,}", "\u{200C}"),
    ]
});

/// Clean up redundant and misplaced whitespace.
///
/// | Rule | Effect |
/// |------|--------|
/// | trim | outer whitespace removed (before and after the rules) |
/// | collapse | runs of space/tab → one space |
/// | punctuation | no space before `? ! ؟ ٪ ؛ ، . :`, one space after when a letter follows |
/// | blank lines | 2+ consecutive line breaks → exactly one blank line |
/// | ZWNJ | whitespace around a ZWNJ removed, ZWNJ runs collapsed |
///
/// The digit exception keeps decimal numbers (`۲.۵`, `3:30`) intact. No
/// space is inserted before a straight quote or a closing mark
/// (`" » ) ] }`) either, so a quotation or bracket can close right after
/// its punctuation (`«خوب.»`, `(آری!)`).
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanSpacing;

/// Free-function form of [`CleanSpacing`].
pub fn clean_spacing(text: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(text.trim());
    for (re, replacement) in RULES.iter() {
        let replaced = match re.replace_all(&current, *replacement) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            current = Cow::Owned(s);
        }
    }

    match current {
        Cow::Borrowed(s) if s.len() == text.len() => Cow::Borrowed(text),
        Cow::Borrowed(s) => Cow::Owned(s.to_owned()),
        Cow::Owned(s) => {
            let trimmed = s.trim();
            if trimmed == text {
                Cow::Borrowed(text)
            } else if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}

impl Stage for CleanSpacing {
    fn name(&self) -> &'static str {
        "clean_spacing"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(matches!(clean_spacing(text), Cow::Owned(_)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, clean_spacing))
    }
}

#[cfg(test)]
impl StageTestConfig for CleanSpacing {
    fn samples() -> &'static [&'static str] {
        &[
            "  سلام  دنیا  ",
            "سلام . دنیا",
            "a\n\n\n\nb",
            "نیم \u{200C} فاصله",
            "قیمت ۲.۵ دلار",
            "\t",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",
            "سلام. دنیا",
            "خط اول\n\nخط دوم",
            "نیم\u{200C}فاصله",
            "۲.۵ و 3:30",
            "«نقل قول…»",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  سلام  دنیا  ", "سلام دنیا"),
            ("سلام   دنیا", "سلام دنیا"),
            ("سلام . دنیا", "سلام. دنیا"),
            ("سلام ؟", "سلام؟"),
            ("نیم\u{200C} فاصله", "نیم\u{200C}فاصله"),
            ("نیم \u{200C} فاصله", "نیم\u{200C}فاصله"),
            ("نیم  \u{200C}  فاصله", "نیم\u{200C}فاصله"),
            ("\u{200C}\u{200C}", "\u{200C}"),
            ("خط اول\n\n\nخط دوم", "خط اول\n\nخط دوم"),
            ("سلام،دنیا", "سلام، دنیا"),
            ("a\tb", "a b"),
        ]
    }
}
