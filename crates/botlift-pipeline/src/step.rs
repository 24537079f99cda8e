use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed, lazily-awaited action of one provisioning step.
pub type StepAction<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'a>>;

/// One externally observable provisioning action with a human-readable label.
///
/// Steps are data, not control flow: the orchestrator constructs the full
/// ordered sequence up front and the pipeline consumes it. The action is
/// awaited at most once.
pub struct Step<'a> {
    label: String,
    action: StepAction<'a>,
}

impl<'a> Step<'a> {
    pub fn new(
        label: impl Into<String>,
        action: impl Future<Output = anyhow::Result<()>> + 'a,
    ) -> Self {
        Self {
            label: label.into(),
            action: Box::pin(action),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn into_parts(self) -> (String, StepAction<'a>) {
        (self.label, self.action)
    }
}

impl fmt::Debug for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
