//! Subprocess invocation and exit-status classification.
//!
//! `CommandRunner` is the seam between orchestration and the OS; the
//! production `SystemRunner` blocks until the child exits. There is no
//! retry and no timeout at this layer.

use serde::Serialize;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Structured payloads shorter than this are never a valid report.
pub const MIN_PAYLOAD_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One external command: program, arguments, environment overrides.
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub env: Vec<(String, OsString)>,
    /// Capture stdout/stderr instead of passing them through.
    pub capture: bool,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            capture: true,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn inherit_output(mut self) -> Self {
        self.capture = false;
        self
    }

    /// Arguments as lossy strings, for assertions and logs.
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Shell-like rendering used in logs and error messages.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + self.env.len() + 1);
        for (k, v) in &self.env {
            parts.push(format!("{}={}", k, v.to_string_lossy()));
        }
        parts.push(self.program.to_string_lossy().into_owned());
        parts.extend(self.arg_strings());
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Captured result of a finished subprocess.
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null());

        if invocation.capture {
            let output = cmd.output()?;
            Ok(CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                code: output.status.code(),
            })
        } else {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()?;
            Ok(CommandOutput {
                code: status.code(),
                ..CommandOutput::default()
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
/// How a linter run ended. Ordered from best to worst.
pub enum RunOutcome {
    Clean,
    Violations,
    ExecutionError,
}

impl RunOutcome {
    /// 0 is clean, 1 means violations were found, anything else is an
    /// execution error.
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => RunOutcome::Clean,
            Some(1) => RunOutcome::Violations,
            _ => RunOutcome::ExecutionError,
        }
    }

    /// Classify a structured-output run: the exit code must be 0 or 1 and
    /// the payload must be at least a minimal envelope.
    pub fn classify(code: Option<i32>, payload: &str) -> Self {
        match RunOutcome::from_exit_code(code) {
            RunOutcome::ExecutionError => RunOutcome::ExecutionError,
            _ if payload.trim().len() < MIN_PAYLOAD_LEN => RunOutcome::ExecutionError,
            outcome => outcome,
        }
    }

    pub fn worst(self, other: RunOutcome) -> RunOutcome {
        self.max(other)
    }
}
