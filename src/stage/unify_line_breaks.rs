use crate::stage::{Stage, StageError, apply_rewrite};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use memchr::memchr;
use std::borrow::Cow;

/// Unify line endings: `\r\n` and lone `\r` become `\n`.
///
/// Runs first in the Persian pipeline so the spacing cleaner only ever sees
/// `\n` line breaks.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnifyLineBreaks;

/// Free-function form of [`UnifyLineBreaks`].
pub fn unify_line_breaks(text: &str) -> Cow<'_, str> {
    if memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            chars.next_if_eq(&'\n');
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

impl Stage for UnifyLineBreaks {
    fn name(&self) -> &'static str {
        "unify_line_breaks"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(memchr(b'\r', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, unify_line_breaks))
    }
}

#[cfg(test)]
impl StageTestConfig for UnifyLineBreaks {
    fn samples() -> &'static [&'static str] {
        &["a\r\nb", "a\rb", "\r\r\n\n", "no breaks", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("خط اول\r\nخط دوم\rخط سوم\nخط چهارم", "خط اول\nخط دوم\nخط سوم\nخط چهارم"),
            ("\r\n\r\n", "\n\n"),
            ("\r\r", "\n\n"),
            ("\n\r", "\n\n"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(UnifyLineBreaks);
    }
}
