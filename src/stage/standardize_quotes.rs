use crate::{
    stage::{Stage, StageError, apply_rewrite},
    unicode::{CLOSE_QUOTE, OPEN_QUOTE},
};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use memchr::memchr;
use std::borrow::Cow;

/// Replace straight double quotes with the directional pair `«` / `»`.
///
/// Quotes are paired strictly by occurrence order: the first `"` opens, the
/// next closes, and so on, regardless of the surrounding text. An odd number
/// of straight quotes therefore leaves a trailing unpaired `«`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardizeQuotes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    ExpectOpen,
    ExpectClose,
}

impl QuoteState {
    #[inline(always)]
    fn emit(&mut self) -> char {
        match *self {
            QuoteState::ExpectOpen => {
                *self = QuoteState::ExpectClose;
                OPEN_QUOTE
            }
            QuoteState::ExpectClose => {
                *self = QuoteState::ExpectOpen;
                CLOSE_QUOTE
            }
        }
    }
}

/// Free-function form of [`StandardizeQuotes`].
pub fn standardize_quotes(text: &str) -> Cow<'_, str> {
    if memchr(b'"', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    let mut state = QuoteState::ExpectOpen;
    Cow::Owned(
        text.chars()
            .map(|c| if c == '"' { state.emit() } else { c })
            .collect(),
    )
}

impl Stage for StandardizeQuotes {
    fn name(&self) -> &'static str {
        "standardize_quotes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(memchr(b'"', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, standardize_quotes))
    }
}

#[cfg(test)]
impl StageTestConfig for StandardizeQuotes {
    fn samples() -> &'static [&'static str] {
        &["\"a\"", "«a»", "no quotes", "\"", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("این \"نقل قول\" است.", "این «نقل قول» است."),
            ("\"ابتدا\" و \"انتها\"", "«ابتدا» و «انتها»"),
            ("\"\"", "«»"),
        ]
    }
}
