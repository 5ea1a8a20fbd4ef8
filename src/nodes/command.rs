use crate::core::CommandRunner;
use crate::error::{ComposeError, ComposeResult};

/// Output of a command that was allowed to contribute a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCapture {
    pub output: String,
    /// Set when the command exited with status 1.
    pub warning: Option<String>,
}

/// Run `command` and apply the exit-status policy: 0 succeeds, 1 succeeds
/// with a warning, anything else fails and the output is discarded.
pub fn run_command(runner: &dyn CommandRunner, command: &str) -> ComposeResult<CommandCapture> {
    let result = runner
        .run(command)
        .map_err(|e| ComposeError::CommandFailed {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

    match result.exit_code {
        Some(0) => Ok(CommandCapture {
            output: result.output,
            warning: None,
        }),
        Some(1) => {
            let warning =
                format!("command '{command}' exited with status 1 but continuing processing");
            tracing::warn!("{}", warning);
            Ok(CommandCapture {
                output: result.output,
                warning: Some(warning),
            })
        }
        Some(code) => Err(ComposeError::CommandFailed {
            command: command.to_string(),
            reason: format!("exit status: {code}"),
        }),
        None => Err(ComposeError::CommandFailed {
            command: command.to_string(),
            reason: "terminated by signal".to_string(),
        }),
    }
}
