//! The Persian normalization pipeline and its builder.
//!
//! [`Normalizer::persian`] runs the stages in this fixed order:
//!
//! 1. [`UnifyLineBreaks`]
//! 2. [`CanonicalizeChars`]
//! 3. [`CleanSpacing`]
//! 4. [`StandardizeQuotes`]
//! 5. [`StandardizeEllipsis`]
//! 6. [`JoinSuffixes`]
//! 7. [`CleanSpacing`] again, absorbing whitespace moved by steps 4–6
//!
//! ```
//! use farsinum::Normalizer;
//!
//! let n = Normalizer::persian();
//! assert_eq!(n.normalize("كتاب ها"), "کتاب\u{200C}ها");
//! assert_eq!(n.normalize("\"نقل قول...\""), "«نقل قول…»");
//! ```
use crate::{
    pipeline::Pipeline,
    stage::{
        Stage, StageError,
        canonicalize_chars::{CANONICALIZE_CHARS, CANONICALIZE_CHARS_KEEP_HAMZA, CanonicalizeChars},
        clean_spacing::CleanSpacing,
        join_suffixes::JoinSuffixes,
        standardize_ellipsis::StandardizeEllipsis,
        standardize_quotes::StandardizeQuotes,
        unify_line_breaks::UnifyLineBreaks,
    },
};
#[cfg(feature = "simd")]
use simdutf8::compat::from_utf8;
#[cfg(not(feature = "simd"))]
use std::str::from_utf8;
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("expected UTF-8 text: {0}")]
    TypeMismatch(String),
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    pipeline: Pipeline,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::persian()
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// The full pipeline with every stage enabled.
    pub fn persian() -> Self {
        NormalizerBuilder::default().build()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn try_normalize<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        Ok(self.pipeline.process(Cow::Borrowed(text))?)
    }

    /// Normalize `text`, borrowing it when it is already canonical.
    ///
    /// The built-in stages never fail. When a custom stage does, the error
    /// is logged and the input is returned unchanged; use
    /// [`try_normalize`](Self::try_normalize) to observe it.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.try_normalize(text) {
            Ok(out) => out,
            Err(e) => {
                warn!(error = %e, "normalization failed, returning input unchanged");
                Cow::Borrowed(text)
            }
        }
    }

    /// Normalize raw bytes; anything that is not valid UTF-8 is rejected
    /// with [`NormalizeError::TypeMismatch`].
    pub fn normalize_bytes<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, NormalizeError> {
        let text = from_utf8(bytes).map_err(|e| NormalizeError::TypeMismatch(e.to_string()))?;
        self.try_normalize(text)
    }
}

/// Configures which stages of the fixed order are enabled.
///
/// Disabled stages are left out; the order of the rest never changes.
/// Custom stages run after the suffix joiner and before the final cleanup.
pub struct NormalizerBuilder {
    line_breaks: bool,
    characters: bool,
    fold_hamza: bool,
    quotes: bool,
    ellipsis: bool,
    suffixes: bool,
    final_cleanup: bool,
    custom: Vec<Arc<dyn Stage>>,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            line_breaks: true,
            characters: true,
            fold_hamza: true,
            quotes: true,
            ellipsis: true,
            suffixes: true,
            final_cleanup: true,
            custom: Vec::new(),
        }
    }
}

impl NormalizerBuilder {
    pub fn line_breaks(mut self, on: bool) -> Self {
        self.line_breaks = on;
        self
    }

    pub fn characters(mut self, on: bool) -> Self {
        self.characters = on;
        self
    }

    /// Fold `ئ` to `ی` and drop standalone `ء` (default `true`).
    pub fn fold_hamza(mut self, on: bool) -> Self {
        self.fold_hamza = on;
        self
    }

    pub fn quotes(mut self, on: bool) -> Self {
        self.quotes = on;
        self
    }

    pub fn ellipsis(mut self, on: bool) -> Self {
        self.ellipsis = on;
        self
    }

    pub fn suffixes(mut self, on: bool) -> Self {
        self.suffixes = on;
        self
    }

    pub fn final_cleanup(mut self, on: bool) -> Self {
        self.final_cleanup = on;
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.custom.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Normalizer {
        let mut pipeline = Pipeline::new();
        if self.line_breaks {
            pipeline = pipeline.push(UnifyLineBreaks);
        }
        if self.characters {
            pipeline = pipeline.push(self.canonicalizer());
        }
        pipeline = pipeline.push(CleanSpacing);
        if self.quotes {
            pipeline = pipeline.push(StandardizeQuotes);
        }
        if self.ellipsis {
            pipeline = pipeline.push(StandardizeEllipsis);
        }
        if self.suffixes {
            pipeline = pipeline.push(JoinSuffixes);
        }
        for stage in self.custom {
            pipeline = pipeline.push_arc(stage);
        }
        if self.final_cleanup {
            pipeline = pipeline.push(CleanSpacing);
        }

        debug!(stages = ?pipeline, "normalizer built");
        Normalizer { pipeline }
    }

    fn canonicalizer(&self) -> CanonicalizeChars {
        if self.fold_hamza {
            CANONICALIZE_CHARS
        } else {
            CANONICALIZE_CHARS_KEEP_HAMZA
        }
    }
}
