use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::Arc;

/// Runtime collaborators used by the execution walk.
#[derive(Clone)]
pub struct RuntimeContext {
    pub command_runner: Arc<dyn CommandRunner>,
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self {
            command_runner: Arc::new(ShellCommandRunner),
        }
    }
}

impl RuntimeContext {
    pub fn with_command_runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.command_runner = runner;
        self
    }
}

/// Captured result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Standard output and standard error, interleaved as written.
    pub output: String,
}

pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion. An `Err` means the process could not be
    /// spawned or its output could not be collected.
    fn run(&self, command: &str) -> io::Result<CommandOutput>;
}

// --- Real implementation ---

/// Runs commands through the platform shell (`sh -c`, `cmd /C` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str) -> io::Result<CommandOutput> {
        let (mut reader, writer) = io::pipe()?;
        let stderr_writer = writer.try_clone()?;

        let mut child = {
            let mut cmd = shell_command(command);
            cmd.stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer);
            cmd.spawn()?
        };

        // Both write ends now live only in the child, so EOF arrives when it exits.
        let mut bytes = Vec::new();
        let read_result = reader.read_to_end(&mut bytes);
        let status = child.wait()?;
        read_result?;

        Ok(CommandOutput {
            exit_code: status.code(),
            output: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
