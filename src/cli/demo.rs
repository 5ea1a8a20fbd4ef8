//! `pcp demo`: writes a small sample prompt tree and compiles it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compiler::{CompileOptions, OutputTarget, PromptCompiler};
use crate::error::{ComposeError, ComposeResult};

pub const DEMO_DIR: &str = "demo";

const DEMO_FILES: [(&str, &str); 4] = [
    (
        "intro.md",
        r#"# PCP Demo
This is a demonstration of the Prompt Composition Processor.

A prompt file can pull content from several places:
- Files, like this markdown file
- Command output, such as git status or system info
- Literal text blocks
- Other prompt files, for modular organization

Everything is compiled into a single context file for an AI agent.
"#,
    ),
    (
        "sample.txt",
        r#"This is sample content from a plain text file.
It spans several lines to show that file contents
are included exactly as they are on disk.

Any text format works:
- Source code
- Documentation
- Configuration files
- Data files
"#,
    ),
    (
        "nested.yml",
        r#"prompt:
  - file: "sample.txt"
  - text: |
      This content comes from a nested prompt file.

      Nested prompts let you:
      - Build modular, reusable components
      - Share common content across projects
      - Keep large prompts organized
  - command: "echo 'Nested prompts can run commands too.'"
"#,
    ),
    (
        "main.yml",
        r#"prompt:
  - file: "intro.md"
  - command: "echo 'Current time:' && date"
  - prompt: "nested.yml"
  - text: |
      This multiline text block shows how pcp keeps
      formatting intact.

      Use text blocks for:
      - Instructions for AI agents
      - Context information
      - Notes and explanations

      The result is one well-formatted stream that can be
      handed directly to AI tools.
"#,
    ),
];

/// Write the demo files into `<base>/demo/`, returning their paths.
pub fn write_demo_files(base: &Path) -> ComposeResult<Vec<PathBuf>> {
    let dir = base.join(DEMO_DIR);
    fs::create_dir_all(&dir).map_err(|source| ComposeError::OutputWrite {
        file: dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(DEMO_FILES.len());
    for (name, content) in DEMO_FILES {
        let path = dir.join(name);
        fs::write(&path, content).map_err(|source| ComposeError::OutputWrite {
            file: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

/// Create the demo tree under `base` and compile it to stdout.
pub fn run_demo(base: &Path) -> ComposeResult<()> {
    println!("Creating PCP demonstration...");
    for path in write_demo_files(base)? {
        let shown = path.strip_prefix(base).unwrap_or(&path);
        println!("Created {}", shown.display());
    }

    println!("\nRunning PCP demonstration...");
    println!("----------------------------------------");

    let main = base.join(DEMO_DIR).join("main.yml");
    PromptCompiler::new(CompileOptions::default()).compile_to(&main, &OutputTarget::Stdout)?;

    eprintln!("\nDemo completed successfully.");
    eprintln!("Demo files created in {DEMO_DIR}/ directory");
    eprintln!("Clean up with: rm -rf {DEMO_DIR}/");
    eprintln!("\nTry different delimiter styles:");
    for style in ["minimal", "none", "full"] {
        eprintln!("   pcp -f {DEMO_DIR}/main.yml --delimiter-style {style}");
    }
    Ok(())
}
