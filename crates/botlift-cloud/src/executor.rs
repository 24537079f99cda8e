use crate::command::CommandError;

/// Abstraction over external CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command and capture stdout.
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, CommandError>;

    /// Execute a command, streaming output to the terminal.
    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), CommandError>;
}

/// Real executor backed by `tokio::process`.
pub struct RealExecutor;

impl CommandExecutor for RealExecutor {
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| CommandError::NotFound {
                program: program.to_owned(),
                source: e,
            })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| CommandError::InvalidUtf8 {
                program: program.to_owned(),
                source: e,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(CommandError::Failed {
                program: program.to_owned(),
                args: args.to_vec(),
                stderr,
            })
        }
    }

    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), CommandError> {
        use std::process::Stdio;

        let status = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| CommandError::NotFound {
                program: program.to_owned(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                program: program.to_owned(),
                args: args.to_vec(),
                stderr: format!("exit code: {status}"),
            })
        }
    }
}
