use crate::step::Step;

/// Failure of a single step: the label plus the underlying cause.
#[derive(Debug)]
pub struct StepFailure {
    pub label: String,
    pub cause: anyhow::Error,
}

/// Runs one step and maps its outcome to success or [`StepFailure`].
///
/// The action is awaited exactly once with no retries. Whether the side
/// effect is idempotent is up to the external operation; an "already exists"
/// style error is surfaced unchanged.
pub struct StepExecutor {
    total: usize,
}

impl StepExecutor {
    pub fn new(total: usize) -> Self {
        Self { total }
    }

    pub async fn run(&self, index: usize, step: Step<'_>) -> Result<(), StepFailure> {
        let (label, action) = step.into_parts();
        tracing::info!(step = %label, "[{}/{}] {label}", index + 1, self.total);

        match action.await {
            Ok(()) => {
                tracing::debug!(step = %label, "step completed");
                Ok(())
            }
            Err(cause) => {
                tracing::error!(step = %label, error = %cause, "step failed");
                Err(StepFailure { label, cause })
            }
        }
    }
}
