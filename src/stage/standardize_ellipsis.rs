use crate::{
    stage::{Stage, StageError, apply_rewrite},
    unicode::ELLIPSIS,
};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use memchr::memmem;
use std::borrow::Cow;

/// Collapse every run of three or more periods into the single `…` glyph.
///
/// Runs of one or two periods (sentence ends, `..`) are left alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardizeEllipsis;

/// Free-function form of [`StandardizeEllipsis`].
pub fn standardize_ellipsis(text: &str) -> Cow<'_, str> {
    let Some(first) = memmem::find(text.as_bytes(), b"...") else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut dots = 0usize;
    for c in text[first..].chars() {
        if c == '.' {
            dots += 1;
            continue;
        }
        flush_dots(&mut out, dots);
        dots = 0;
        out.push(c);
    }
    flush_dots(&mut out, dots);
    Cow::Owned(out)
}

#[inline]
fn flush_dots(out: &mut String, dots: usize) {
    if dots >= 3 {
        out.push(ELLIPSIS);
    } else {
        out.extend(std::iter::repeat_n('.', dots));
    }
}

impl Stage for StandardizeEllipsis {
    fn name(&self) -> &'static str {
        "standardize_ellipsis"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(memmem::find(text.as_bytes(), b"...").is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, standardize_ellipsis))
    }
}

#[cfg(test)]
impl StageTestConfig for StandardizeEllipsis {
    fn samples() -> &'static [&'static str] {
        &["صبر کن...", "a.b", "..", "....", "۲.۵", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("صبر کن....", "صبر کن…"),
            ("صبر کن... تمام می شود.", "صبر کن… تمام می شود."),
            ("...", "…"),
            ("a..b...c", "a..b…c"),
            ("..........", "…"),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_or_two_periods_untouched() {
        assert!(matches!(standardize_ellipsis("پایان."), Cow::Borrowed(_)));
        assert!(matches!(standardize_ellipsis("پایان.."), Cow::Borrowed(_)));
    }

    #[test]
    fn separate_runs_each_collapse() {
        assert_eq!(standardize_ellipsis("خب... بعد...."), "خب… بعد…");
    }

    #[test]
    fn existing_glyph_is_kept() {
        assert_eq!(standardize_ellipsis("…..."), "……");
    }
}
