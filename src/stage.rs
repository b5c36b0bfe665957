//! Core normalization stage abstraction.
//!
//! A stage is one small, independently testable rewrite of the text. Stages
//! are composed by [`Pipeline`](crate::pipeline::Pipeline) in a fixed order;
//! the order is part of the contract (see [`Normalizer`](crate::Normalizer)).
//!
//! Every stage follows the same two-step protocol:
//!
//! * `needs_apply(&self, text)` – exact pre-check. Returning `Ok(false)` means
//!   `apply` would return the text unchanged, so the pipeline skips the stage
//!   and keeps the caller's `Cow::Borrowed` input alive.
//! * `apply(&self, text)` – the transformation. Must always be correct, even
//!   when called without a preceding `needs_apply`.

pub mod canonicalize_chars;
pub mod clean_spacing;
pub mod join_suffixes;
pub mod standardize_ellipsis;
pub mod standardize_quotes;
pub mod unify_line_breaks;

use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),

    #[error("Normalization validation failed at stage `{0}`: {1}")]
    Validation(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation.  Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;
}

/// Lift a borrowed rewrite into the `Cow` protocol of [`Stage::apply`].
///
/// `rewrite` must return `Cow::Borrowed` exactly when it leaves the text
/// unchanged; owned input is then handed back without a copy.
#[inline]
pub(crate) fn apply_rewrite<'a>(
    text: Cow<'a, str>,
    rewrite: impl for<'b> Fn(&'b str) -> Cow<'b, str>,
) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => rewrite(s),
        Cow::Owned(s) => {
            let changed = match rewrite(&s) {
                Cow::Owned(out) => Some(out),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(changed.unwrap_or(s))
        }
    }
}
