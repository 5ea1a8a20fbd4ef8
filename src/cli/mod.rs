//! Command-line surface for the `pcp` binary.
//!
//! Errors go to stderr only; stdout carries nothing but compiled text so it
//! can be piped straight into downstream tools.

pub mod demo;

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::compiler::{CompileOptions, OutputTarget, PromptCompiler, DEFAULT_MAX_WORDS};
use crate::render::DelimiterStyle;

const AFTER_HELP: &str = r#"Important: All errors are written to STDERR to ensure safe piping to agents.

Usage Patterns:
  RECOMMENDED: write to a file, then hand the file to the agent
    pcp -f prompt.yml -o context.txt && agent < context.txt

  AVOID: command substitution (the agent runs even if pcp fails)
    $(pcp -f prompt.yml) | agent

Prompt File Format:
  prompt:
    - file: "relative/path/to/file.txt"
    - prompt: "nested-prompt.yml"
    - command: "ls -la"
    - text: "Literal text content"

  Paths are relative to the prompt file that declares them.

Text Field Special Characters:
  Multiline text with a YAML literal block scalar:
    - text: |
        This is line one
        This is line two
  Escapes in double-quoted strings:
    - text: "Line with\nnewline and\ttab"
  Folded text (line breaks become spaces):
    - text: >
        This text will be folded
        into a single paragraph
"#;

/// Long flags also accepted with a single dash (`-max-words 10`,
/// `-delimiter-style=none`), the spelling of earlier pcp releases.
const SINGLE_DASH_LONG_FLAGS: [&str; 3] = ["max-words", "delimiter-style", "help"];

#[derive(Debug, Parser)]
#[command(
    name = "pcp",
    about = "pcp: Prompt Composition Processor",
    long_about = "pcp: Prompt Composition Processor\n\nCompiles content from multiple sources into a single text output for AI agents.",
    override_usage = "pcp -f <prompt-file> [-o <output-file>] [--max-words <limit>] [--delimiter-style <style>]\n       pcp demo",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to YAML prompt file (required)
    #[arg(short = 'f', long = "file", value_name = "PROMPT_FILE")]
    pub prompt_file: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Maximum words in compiled output
    #[arg(long = "max-words", env = "PCP_MAX_WORDS", default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,

    /// Delimiter style: xml, minimal, none, full
    #[arg(
        long = "delimiter-style",
        env = "PCP_DELIMITER_STYLE",
        default_value = "xml",
        value_name = "STYLE"
    )]
    pub delimiter_style: DelimiterStyle,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create and run a demonstration with sample files
    Demo,
}

impl Cli {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_max_words(self.max_words)
            .with_delimiter_style(self.delimiter_style)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn`
/// default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Parse `args` and run. Returns 0 on success (including `--help`) and 1
/// on any failure.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(with_double_dash_long_flags(args)) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if let Some(Command::Demo) = cli.command {
        return report(demo::run_demo(std::path::Path::new(".")));
    }

    let Some(prompt_file) = cli.prompt_file.as_deref() else {
        eprintln!("Error: -f flag is required");
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    let target = OutputTarget::from_option(cli.output.clone());
    let compiler = PromptCompiler::new(cli.compile_options());
    report(compiler.compile_to(prompt_file, &target))
}

/// Rewrite `-name` and `-name=value` into `--name` form for the flags in
/// [`SINGLE_DASH_LONG_FLAGS`]. Arguments after `--` are left alone.
fn with_double_dash_long_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg == "--" {
                after_terminator = true;
                return arg;
            }
            double_dash_form(&arg).unwrap_or(arg)
        })
        .collect()
}

fn double_dash_form(arg: &OsStr) -> Option<OsString> {
    let rest = arg.to_str()?.strip_prefix('-')?;
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG_FLAGS
        .contains(&name)
        .then(|| OsString::from(format!("--{rest}")))
}

fn report(result: crate::error::ComposeResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "compilation failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
