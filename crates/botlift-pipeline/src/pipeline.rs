use tokio_util::sync::CancellationToken;

use crate::executor::StepExecutor;
use crate::step::Step;

/// Terminal outcome of a pipeline run.
#[derive(Debug)]
pub enum RunResult {
    /// Every step ran and succeeded.
    Succeeded { completed: usize },
    /// Step `index` failed; later steps never ran.
    Failed {
        index: usize,
        label: String,
        cause: anyhow::Error,
    },
    /// Cancellation was observed before step `index` started.
    Cancelled { index: usize, label: String },
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Ordered, fail-fast sequence of provisioning steps.
///
/// Step i+1 starts only if step i succeeded. The first failure halts the
/// run; side effects of earlier steps are left in place (no rollback).
/// Cancellation is checked between steps, never within one — external tool
/// invocations are atomic from the pipeline's point of view.
pub struct Pipeline<'a> {
    steps: Vec<Step<'a>>,
    cancel: CancellationToken,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn push(&mut self, step: Step<'a>) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step<'a>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Execute all steps in order and return the terminal outcome.
    pub async fn run(self) -> RunResult {
        let Self { steps, cancel } = self;
        let total = steps.len();
        let executor = StepExecutor::new(total);

        for (index, step) in steps.into_iter().enumerate() {
            if cancel.is_cancelled() {
                let label = step.label().to_owned();
                tracing::warn!(step = %label, "cancelled before step started");
                return RunResult::Cancelled { index, label };
            }

            if let Err(failure) = executor.run(index, step).await {
                return RunResult::Failed {
                    index,
                    label: failure.label,
                    cause: failure.cause,
                };
            }
        }

        RunResult::Succeeded { completed: total }
    }
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}
