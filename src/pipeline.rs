//! Ordered, type-erased chain of stages.
//!
//! Every stage is asked `needs_apply` first; a stage that has nothing to do
//! is skipped, so a fully canonical input travels through the whole chain as
//! the caller's `Cow::Borrowed` slice.
use crate::stage::{Stage, StageError};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt, sync::Arc};
use tracing::trace;

#[derive(Default, Clone)]
pub struct Pipeline {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Pipeline {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    #[inline(always)]
    pub fn push_arc(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn process<'a>(&self, mut text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text)? {
                trace!(stage = stage.name(), "skipped");
                continue;
            }
            let before = text.len();
            text = stage.apply(text)?;
            trace!(stage = stage.name(), before, after = text.len(), "applied");
        }
        Ok(text)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}
