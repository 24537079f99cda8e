use std::path::{Path, PathBuf};

use crate::command::CommandError;
use crate::executor::{CommandExecutor, RealExecutor};

/// Container build/push client, parameterized over the executor for
/// testability. Output is streamed so build progress reaches the terminal.
pub struct DockerClient<E: CommandExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    pub async fn build(&self, tag: &str, context: &Path) -> Result<(), DockerError> {
        let context_str = context
            .to_str()
            .ok_or_else(|| DockerError::InvalidContext(context.to_path_buf()))?;

        self.executor
            .exec_streaming("docker", &args(["build", "-t", tag, context_str]))
            .await
            .map_err(|e| DockerError::Build {
                tag: tag.to_owned(),
                source: e,
            })
    }

    pub async fn push(&self, tag: &str) -> Result<(), DockerError> {
        self.executor
            .exec_streaming("docker", &args(["push", tag]))
            .await
            .map_err(|e| DockerError::Push {
                tag: tag.to_owned(),
                source: e,
            })
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("build context path is not valid UTF-8: {0}")]
    InvalidContext(PathBuf),

    #[error("docker build failed for {tag}")]
    Build { tag: String, source: CommandError },

    #[error("docker push failed for {tag}")]
    Push { tag: String, source: CommandError },
}
