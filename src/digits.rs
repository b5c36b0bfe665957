//! Western ⇄ Persian digit translation.
//!
//! Both directions are driven by the same pair of ordered tables: the digit
//! at index `i` of [`WESTERN_DIGITS`] corresponds to index `i` of
//! [`PERSIAN_DIGITS`]. Every other character passes through untouched.
//!
//! ```
//! use farsinum::digits::{to_persian_digits, to_western_digits};
//!
//! assert_eq!(to_persian_digits("test 456 with 789"), "test ۴۵۶ with ۷۸۹");
//! assert_eq!(to_persian_digits(&123), "۱۲۳");
//! assert_eq!(to_western_digits("۰۹۱۲۳۴۵۶۷۸۹"), "09123456789");
//! ```

use crate::{
    stage::{Stage, StageError, apply_rewrite},
    unicode::{is_persian_digit, is_western_digit},
};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use std::borrow::Cow;

pub const WESTERN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Anything whose textual form can be digit-translated.
///
/// Strings are used as-is; integers are stringified first.
pub trait AsDigits {
    fn as_digits(&self) -> Cow<'_, str>;
}

impl AsDigits for str {
    #[inline]
    fn as_digits(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AsDigits for String {
    #[inline]
    fn as_digits(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl AsDigits for Cow<'_, str> {
    #[inline]
    fn as_digits(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

macro_rules! impl_as_digits_for_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl AsDigits for $int {
                #[inline]
                fn as_digits(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_as_digits_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Map Western digits (`0`–`9`) to Persian digits (`۰`–`۹`).
pub fn to_persian_digits<T: AsDigits + ?Sized>(input: &T) -> Cow<'_, str> {
    translate(input.as_digits(), is_western_digit, &WESTERN_DIGITS, &PERSIAN_DIGITS)
}

/// Map Persian digits (`۰`–`۹`) to Western digits (`0`–`9`).
pub fn to_western_digits<T: AsDigits + ?Sized>(input: &T) -> Cow<'_, str> {
    translate(input.as_digits(), is_persian_digit, &PERSIAN_DIGITS, &WESTERN_DIGITS)
}

#[inline]
fn translate<'a>(
    text: Cow<'a, str>,
    is_source: fn(char) -> bool,
    from: &[char; 10],
    to: &[char; 10],
) -> Cow<'a, str> {
    let map = |s: &str| -> Option<String> {
        if !s.chars().any(is_source) {
            return None;
        }
        Some(
            s.chars()
                .map(|c| match from.iter().position(|&d| d == c) {
                    Some(i) => to[i],
                    None => c,
                })
                .collect(),
        )
    };
    match text {
        Cow::Borrowed(s) => map(s).map_or(Cow::Borrowed(s), Cow::Owned),
        Cow::Owned(s) => Cow::Owned(map(&s).unwrap_or(s)),
    }
}

/// Pipeline stage form of [`to_persian_digits`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PersianDigits;

/// Pipeline stage form of [`to_western_digits`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WesternDigits;

impl Stage for PersianDigits {
    fn name(&self) -> &'static str {
        "persian_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.bytes().any(|b| b.is_ascii_digit()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, |s| to_persian_digits(s)))
    }
}

impl Stage for WesternDigits {
    fn name(&self) -> &'static str {
        "western_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(is_persian_digit))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_rewrite(text, |s| to_western_digits(s)))
    }
}

#[cfg(test)]
impl StageTestConfig for PersianDigits {
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "abc def", "۱۲۳", "سلام دنیا", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("123", "۱۲۳"), ("0987654321", "۰۹۸۷۶۵۴۳۲۱"), ("test 456 with 789", "test ۴۵۶ with ۷۸۹")]
    }
}

#[cfg(test)]
impl StageTestConfig for WesternDigits {
    fn samples() -> &'static [&'static str] {
        &["تست ۴۵۶", "123", "٠١٢", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "test123", "abc def", "اینجا عددی نیست", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("۱۲۳", "123"), ("تست ۴۵۶ با ۷۸۹", "تست 456 با 789")]
    }
}

#[cfg(test)]
mod contract_tests {
    use crate::assert_stage_contract;

    use super::*;

    #[test]
    fn universal_contract_compliance() {
        // Western digits are altered by `PersianDigits` by definition, so
        // the ASCII check is done by hand below.
        crate::testing::stage_contract::zero_copy_when_no_changes(PersianDigits);
        crate::testing::stage_contract::stage_is_idempotent(PersianDigits);
        crate::testing::stage_contract::needs_apply_is_accurate(PersianDigits);
        crate::testing::stage_contract::no_panic_on_mixed_scripts(PersianDigits);
        assert_stage_contract!(WesternDigits);
    }
}
