use crate::error::{AptupError, Result};
use std::fmt;
use std::process::Command;

/// An external command to run: the program plus its arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of one finished command.
#[derive(Clone, Debug)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// The single seam through which every external command runs.
///
/// `Err` means the process could not be launched at all; a non-zero exit
/// comes back as an ordinary `CommandOutput`.
pub trait CommandRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput>;
}

/// Blocking runner over the real system.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
        if std::env::var("APTUP_VERBOSE").is_ok() {
            eprintln!("[VERBOSE] Running: {command}");
        }

        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .map_err(|e| AptupError::ExternalTool(format!("Failed to execute '{command}': {e}")))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
