//! Whole-file style checks through external linters.
//!
//! A run invokes the primary linter over the given files (or the default
//! root when none are given). Only for the default run, the auxiliary shell
//! checker is also invoked over the entry-point script and shell utilities;
//! a missing checker is logged and skipped.
//!
//! Output modes:
//! - `Print`: the linter writes to our stdout itself; only the exit code is kept.
//! - `Structured`: JSON reports are captured and parsed into a `RunResult`.

pub mod aggregate;
pub mod registry;
pub mod runner;

pub use registry::RuleRegistry;
pub use runner::{CommandOutput, CommandRunner, Invocation, RunOutcome, SystemRunner};

use crate::error::StyleError;
use crate::models::RunResult;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

type PayloadParser = fn(&str, &Path) -> Result<RunResult, serde_json::Error>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Fix mode and parallel mode never run together.
pub enum RunMode {
    #[default]
    Parallel,
    Fix,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Restrict the run to some rules, or exclude some. Never both.
pub enum RuleFilter {
    #[default]
    All,
    Only(Vec<String>),
    Except(Vec<String>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Print,
    Structured,
}

#[derive(Debug, Clone, Default)]
pub struct StyleOptions {
    pub mode: RunMode,
    pub filter: RuleFilter,
    pub verbose: bool,
    pub display_cop_names: bool,
    pub debug: bool,
    pub reset_cache: bool,
    /// Ask the linter for colored output (print mode).
    pub color: bool,
    /// Running on CI: prefer the compact formatter (print mode).
    pub ci: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Locations and executables used by a style run. Paths are absolute.
pub struct StyleSettings {
    pub linter: PathBuf,
    /// `None` disables the auxiliary checker.
    pub checker: Option<PathBuf>,
    /// Default target when no files are given.
    pub root: PathBuf,
    pub config: PathBuf,
    /// Config used when the first target contains a `spec` directory.
    pub spec_config: PathBuf,
    pub cache_dir: PathBuf,
    pub entry_point: PathBuf,
    /// Globs (relative to `repo_root`) selecting shell utilities for the checker.
    pub shell_globs: Vec<String>,
    pub repo_root: PathBuf,
    /// Static rule registry; when empty the linter is asked via `--show-cops`.
    pub rules: Vec<String>,
}

impl StyleSettings {
    pub fn for_repo(repo_root: &Path) -> Self {
        Self {
            linter: PathBuf::from("rubocop"),
            checker: Some(PathBuf::from("shellcheck")),
            root: repo_root.join("Library/Homebrew"),
            config: repo_root.join("Library/.rubocop.yml"),
            spec_config: repo_root.join("Library/.rubocop_rspec.yml"),
            cache_dir: repo_root.join(".cache/desclint"),
            entry_point: repo_root.join("bin/brew"),
            shell_globs: vec![
                "Library/Homebrew/*.sh".to_string(),
                "Library/Homebrew/cmd/*.sh".to_string(),
                "Library/Homebrew/utils/*.sh".to_string(),
            ],
            repo_root: repo_root.to_path_buf(),
            rules: Vec::new(),
        }
    }

    /// Cache directory handed to the linter via `XDG_CACHE_HOME`.
    pub fn style_cache(&self) -> PathBuf {
        self.cache_dir.join("style")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuxiliaryStatus {
    /// Explicit targets were given; the checker only runs by default.
    NotRequested,
    Skipped { reason: String },
    Ran(RunOutcome),
}

#[derive(Debug, Clone)]
pub struct StyleReport {
    /// Worst outcome across the linters that ran.
    pub outcome: RunOutcome,
    /// Parsed offenses; structured mode only.
    pub result: Option<RunResult>,
    pub auxiliary: AuxiliaryStatus,
}

pub struct StyleCheck<R: CommandRunner = SystemRunner> {
    settings: StyleSettings,
    runner: R,
}

impl StyleCheck<SystemRunner> {
    pub fn new(settings: StyleSettings) -> Self {
        Self::with_runner(settings, SystemRunner)
    }
}

impl<R: CommandRunner> StyleCheck<R> {
    pub fn with_runner(settings: StyleSettings, runner: R) -> Self {
        Self { settings, runner }
    }

    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    /// Run the configured linters over `files` (default root when empty).
    ///
    /// Unknown filter names fail before any linter starts. Exit codes other
    /// than 0/1 and unusable structured payloads abort the run.
    pub fn check(
        &self,
        files: &[PathBuf],
        options: &StyleOptions,
        output: OutputMode,
    ) -> Result<StyleReport, StyleError> {
        let filter = self.resolve_filter(&options.filter)?;

        let cache = self.settings.style_cache();
        if options.reset_cache && cache.exists() {
            info!("Removing style cache {}", cache.display());
            fs::remove_dir_all(&cache)?;
        }

        let invocation = self.linter_invocation(files, options, &filter, output);
        let (mut outcome, mut result) = self.execute(&invocation, output, aggregate::parse)?;

        let auxiliary = if !files.is_empty() {
            AuxiliaryStatus::NotRequested
        } else {
            match self.checker_invocation(output) {
                Err(reason) => {
                    warn!("Skipping shell checks: {}", reason);
                    AuxiliaryStatus::Skipped { reason }
                }
                Ok(inv) => {
                    let (aux_outcome, aux_result) =
                        self.execute(&inv, output, aggregate::parse_checker)?;
                    outcome = outcome.worst(aux_outcome);
                    result = match (result, aux_result) {
                        (Some(a), Some(b)) => Some(a.merge(b)),
                        (a, b) => a.or(b),
                    };
                    AuxiliaryStatus::Ran(aux_outcome)
                }
            }
        };

        Ok(StyleReport {
            outcome,
            result,
            auxiliary,
        })
    }

    /// Qualify filter names against the registry; unknown names are an error.
    fn resolve_filter(&self, filter: &RuleFilter) -> Result<RuleFilter, StyleError> {
        let (names, only) = match filter {
            RuleFilter::All => return Ok(RuleFilter::All),
            RuleFilter::Only(names) => (names, true),
            RuleFilter::Except(names) => (names, false),
        };
        let registry = self.registry()?;
        let resolved = registry.resolve(names)?;
        if resolved.is_empty() {
            return Ok(RuleFilter::All);
        }
        Ok(if only {
            RuleFilter::Only(resolved)
        } else {
            RuleFilter::Except(resolved)
        })
    }

    fn registry(&self) -> Result<RuleRegistry, StyleError> {
        if !self.settings.rules.is_empty() {
            return Ok(RuleRegistry::new(self.settings.rules.iter().cloned()));
        }
        let inv = Invocation::new(&self.settings.linter).arg("--show-cops");
        let command = inv.command_line();
        debug!("Reading rule registry: {}", command);
        let out = self.runner.run(&inv).map_err(|source| StyleError::Spawn {
            command: command.clone(),
            source,
        })?;
        if out.code != Some(0) {
            return Err(StyleError::Registry {
                command,
                reason: format!("exit code {:?}: {}", out.code, out.stderr.trim()),
            });
        }
        let registry =
            RuleRegistry::from_show_cops(&out.stdout).map_err(|e| StyleError::Registry {
                command: command.clone(),
                reason: e.to_string(),
            })?;
        if registry.is_empty() {
            return Err(StyleError::Registry {
                command,
                reason: "no rules listed".to_string(),
            });
        }
        Ok(registry)
    }

    /// Primary linter command line for this run.
    pub fn linter_invocation(
        &self,
        files: &[PathBuf],
        options: &StyleOptions,
        filter: &RuleFilter,
        output: OutputMode,
    ) -> Invocation {
        let mut args: Vec<OsString> = Vec::new();
        if output == OutputMode::Structured {
            args.push("--format".into());
            args.push("json".into());
        }
        args.push("--force-exclusion".into());
        args.push(
            match options.mode {
                RunMode::Fix => "--autocorrect-all",
                RunMode::Parallel => "--parallel",
            }
            .into(),
        );
        if options.verbose {
            args.push("--extra-details".into());
        }
        if options.display_cop_names || options.verbose {
            args.push("--display-cop-names".into());
        }
        match filter {
            RuleFilter::All => {}
            RuleFilter::Only(names) => {
                args.push("--only".into());
                args.push(names.join(",").into());
            }
            RuleFilter::Except(names) => {
                args.push("--except".into());
                args.push(names.join(",").into());
            }
        }
        if let Some(first) = files.first() {
            let config = if first.join("spec").exists() {
                &self.settings.spec_config
            } else {
                &self.settings.config
            };
            args.push("--config".into());
            args.push(config.as_os_str().to_owned());
        }
        if output == OutputMode::Print {
            if options.debug {
                args.push("--debug".into());
            }
            // Progress dots are noise on CI or for a single file.
            let single_file = files.iter().filter(|f| !f.is_dir()).count() == 1;
            if options.ci || single_file {
                args.push("--format".into());
                args.push("clang".into());
            }
            if options.color {
                args.push("--color".into());
            }
        }
        if files.is_empty() {
            args.push(self.settings.root.as_os_str().to_owned());
        } else {
            args.extend(files.iter().map(|f| f.as_os_str().to_owned()));
        }

        let inv = Invocation::new(&self.settings.linter)
            .args(args)
            .env("XDG_CACHE_HOME", self.settings.style_cache());
        match output {
            OutputMode::Print => inv.inherit_output(),
            OutputMode::Structured => inv,
        }
    }

    /// Auxiliary checker command line, or why it cannot run.
    fn checker_invocation(&self, output: OutputMode) -> Result<Invocation, String> {
        let checker = self.locate_checker()?;
        let files = self.shell_files();
        if files.is_empty() {
            return Err("no shell files found".to_string());
        }
        let format = match output {
            OutputMode::Print => "--format=tty",
            OutputMode::Structured => "--format=json",
        };
        let inv = Invocation::new(checker)
            .args([format, "--shell=bash", "--"])
            .args(files);
        Ok(match output {
            OutputMode::Print => inv.inherit_output(),
            OutputMode::Structured => inv,
        })
    }

    fn locate_checker(&self) -> Result<PathBuf, String> {
        let configured = self
            .settings
            .checker
            .as_ref()
            .ok_or_else(|| "shell checker disabled".to_string())?;
        if configured.is_file() {
            return Ok(configured.clone());
        }
        which::which(configured)
            .map_err(|_| format!("`{}` not found on PATH", configured.display()))
    }

    /// Entry-point script plus every file matched by the shell globs, sorted.
    fn shell_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = Vec::new();
        for pat in &self.settings.shell_globs {
            let abs_glob = self.settings.repo_root.join(pat);
            let pattern = abs_glob.to_string_lossy().to_string();
            match glob::glob(&pattern) {
                Ok(paths) => files.extend(paths.flatten().filter(|p| p.is_file())),
                Err(e) => warn!("Ignoring invalid shell glob '{}': {}", pat, e),
            }
        }
        files.sort();
        files.dedup();
        let entry = &self.settings.entry_point;
        if entry.is_file() {
            files.retain(|f| f != entry);
            files.insert(0, entry.clone());
        }
        files
    }

    fn execute(
        &self,
        invocation: &Invocation,
        output: OutputMode,
        parse: PayloadParser,
    ) -> Result<(RunOutcome, Option<RunResult>), StyleError> {
        let command = invocation.command_line();
        debug!("Running {}", command);
        let out = self
            .runner
            .run(invocation)
            .map_err(|source| StyleError::Spawn {
                command: command.clone(),
                source,
            })?;

        if RunOutcome::from_exit_code(out.code) == RunOutcome::ExecutionError {
            return Err(StyleError::Execution {
                command,
                code: out.code,
                stderr: out.stderr,
            });
        }
        if output == OutputMode::Print {
            return Ok((RunOutcome::from_exit_code(out.code), None));
        }

        let outcome = RunOutcome::classify(out.code, &out.stdout);
        if outcome == RunOutcome::ExecutionError {
            return Err(StyleError::Payload {
                command,
                reason: format!("expected a JSON report, got {} bytes", out.stdout.len()),
                stderr: out.stderr,
            });
        }
        let base = std::env::current_dir()?;
        let result = parse(&out.stdout, &base).map_err(|e| StyleError::Payload {
            command: command.clone(),
            reason: e.to_string(),
            stderr: out.stderr.clone(),
        })?;
        Ok((outcome, Some(result)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;
    use tempfile::tempdir;

    #[derive(Default)]
    struct FakeRunner {
        responses: RefCell<VecDeque<io::Result<CommandOutput>>>,
        calls: RefCell<Vec<Invocation>>,
    }

    impl FakeRunner {
        fn respond(self, code: i32, stdout: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                code: Some(code),
            }));
            self
        }

        fn respond_err(self, code: i32, stderr: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(CommandOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                code: Some(code),
            }));
            self
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
            self.calls.borrow_mut().push(invocation.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::NotFound, "no response")))
        }
    }

    fn settings(root: &Path) -> StyleSettings {
        StyleSettings {
            checker: None,
            rules: vec![
                "FormulaAudit/Desc".into(),
                "Style/StringLiterals".into(),
                "Layout/LineLength".into(),
            ],
            ..StyleSettings::for_repo(root)
        }
    }

    fn report_for(path: &Path) -> String {
        format!(
            r#"{{"files": [{{"path": "{}", "offenses": [
                {{"severity": "convention", "message": "Description shouldn't end with a full stop.",
                  "cop_name": "FormulaAudit/Desc", "corrected": false,
                  "location": {{"line": 3, "column": 8, "length": 12}}}}]}}]}}"#,
            path.display()
        )
    }

    #[test]
    fn test_default_run_targets_root_in_parallel() {
        let dir = tempdir().unwrap();
        let check = StyleCheck::with_runner(settings(dir.path()), FakeRunner::default().respond(0, ""));
        let report = check
            .check(&[], &StyleOptions::default(), OutputMode::Print)
            .unwrap();
        assert_eq!(report.outcome, RunOutcome::Clean);
        assert!(report.result.is_none());
        assert!(matches!(report.auxiliary, AuxiliaryStatus::Skipped { .. }));

        let calls = check.runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].capture);
        let args = calls[0].arg_strings();
        assert_eq!(
            args,
            vec![
                "--force-exclusion".to_string(),
                "--parallel".to_string(),
                dir.path().join("Library/Homebrew").display().to_string(),
            ]
        );
        assert_eq!(calls[0].env[0].0, "XDG_CACHE_HOME");
        assert_eq!(
            PathBuf::from(&calls[0].env[0].1),
            dir.path().join(".cache/desclint/style")
        );
    }

    #[test]
    fn test_fix_mode_with_files_selects_spec_config() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("Library/Homebrew");
        fs::create_dir_all(target.join("spec")).unwrap();
        let check = StyleCheck::with_runner(settings(dir.path()), FakeRunner::default().respond(1, ""));
        let options = StyleOptions {
            mode: RunMode::Fix,
            verbose: true,
            ..StyleOptions::default()
        };
        let report = check
            .check(&[target.clone()], &options, OutputMode::Print)
            .unwrap();
        assert_eq!(report.outcome, RunOutcome::Violations);
        assert_eq!(report.auxiliary, AuxiliaryStatus::NotRequested);

        let args = check.runner.calls.borrow()[0].arg_strings();
        assert!(args.contains(&"--autocorrect-all".to_string()));
        assert!(!args.contains(&"--parallel".to_string()));
        assert!(args.contains(&"--extra-details".to_string()));
        assert!(args.contains(&"--display-cop-names".to_string()));
        let cfg = args.iter().position(|a| a == "--config").unwrap();
        assert_eq!(
            args[cfg + 1],
            dir.path().join("Library/.rubocop_rspec.yml").display().to_string()
        );
        // a directory target does not trigger the compact formatter
        assert!(!args.contains(&"clang".to_string()));
    }

    #[test]
    fn test_single_file_print_flags() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("wget.rb");
        fs::write(&file, "").unwrap();
        let check = StyleCheck::with_runner(settings(dir.path()), FakeRunner::default().respond(0, ""));
        let options = StyleOptions {
            debug: true,
            color: true,
            ..StyleOptions::default()
        };
        check.check(&[file.clone()], &options, OutputMode::Print).unwrap();
        let args = check.runner.calls.borrow()[0].arg_strings();
        let cfg = args.iter().position(|a| a == "--config").unwrap();
        assert_eq!(
            args[cfg + 1],
            dir.path().join("Library/.rubocop.yml").display().to_string()
        );
        for flag in ["--debug", "clang", "--color"] {
            assert!(args.contains(&flag.to_string()), "missing {flag}");
        }
        assert_eq!(args.last().unwrap(), &file.display().to_string());
    }

    #[test]
    fn test_structured_run_parses_violations() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("wget.rb");
        fs::write(&file, "").unwrap();
        let check = StyleCheck::with_runner(
            settings(dir.path()),
            FakeRunner::default().respond(1, &report_for(&file)),
        );
        let report = check
            .check(&[file.clone()], &StyleOptions::default(), OutputMode::Structured)
            .unwrap();
        assert_eq!(report.outcome, RunOutcome::Violations);
        let result = report.result.unwrap();
        assert_eq!(result.lookup(&file).len(), 1);
        assert_eq!(result.lookup(&file)[0].rule_id, "FormulaAudit/Desc");

        let calls = check.runner.calls.borrow();
        assert!(calls[0].capture);
        assert_eq!(&calls[0].arg_strings()[..2], &["--format", "json"]);
        assert!(!calls[0].arg_strings().contains(&"clang".to_string()));
    }

    #[test]
    fn test_unexpected_exit_code_is_execution_error() {
        let dir = tempdir().unwrap();
        let check = StyleCheck::with_runner(
            settings(dir.path()),
            FakeRunner::default().respond_err(2, "invalid option --bogus"),
        );
        let err = check
            .check(&[dir.path().join("a.rb")], &StyleOptions::default(), OutputMode::Structured)
            .unwrap_err();
        match err {
            StyleError::Execution { command, code, stderr } => {
                assert!(command.contains("rubocop --format json"));
                assert_eq!(code, Some(2));
                assert_eq!(stderr, "invalid option --bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_undersized_or_malformed_payload_is_error() {
        let dir = tempdir().unwrap();
        let targets = [dir.path().join("a.rb")];
        for payload in ["", "{\"files\": ["] {
            let check =
                StyleCheck::with_runner(settings(dir.path()), FakeRunner::default().respond(0, payload));
            let err = check
                .check(&targets, &StyleOptions::default(), OutputMode::Structured)
                .unwrap_err();
            assert!(matches!(err, StyleError::Payload { .. }), "payload {payload:?}");
        }
    }

    #[test]
    fn test_unknown_filter_fails_before_running() {
        let dir = tempdir().unwrap();
        let check = StyleCheck::with_runner(settings(dir.path()), FakeRunner::default());
        let options = StyleOptions {
            filter: RuleFilter::Except(vec!["Bogus/Cop".into()]),
            ..StyleOptions::default()
        };
        let err = check.check(&[], &options, OutputMode::Print).unwrap_err();
        assert!(matches!(err, StyleError::UnknownRules { .. }));
        assert!(check.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_only_filter_is_qualified() {
        let dir = tempdir().unwrap();
        let check = StyleCheck::with_runner(settings(dir.path()), FakeRunner::default().respond(0, ""));
        let options = StyleOptions {
            filter: RuleFilter::Only(vec!["Desc".into(), "Layout".into()]),
            ..StyleOptions::default()
        };
        check.check(&[], &options, OutputMode::Print).unwrap();
        let args = check.runner.calls.borrow()[0].arg_strings();
        let only = args.iter().position(|a| a == "--only").unwrap();
        assert_eq!(args[only + 1], "FormulaAudit/Desc,Layout");
    }

    #[test]
    fn test_registry_read_from_linter_when_not_configured() {
        let dir = tempdir().unwrap();
        let settings = StyleSettings {
            rules: Vec::new(),
            ..settings(dir.path())
        };
        let runner = FakeRunner::default()
            .respond(0, "Style/StringLiterals:\n  Enabled: true\n")
            .respond(0, "");
        let check = StyleCheck::with_runner(settings, runner);
        let options = StyleOptions {
            filter: RuleFilter::Except(vec!["StringLiterals".into()]),
            ..StyleOptions::default()
        };
        check.check(&[], &options, OutputMode::Print).unwrap();
        let calls = check.runner.calls.borrow();
        assert_eq!(calls[0].arg_strings(), vec!["--show-cops"]);
        let args = calls[1].arg_strings();
        let except = args.iter().position(|a| a == "--except").unwrap();
        assert_eq!(args[except + 1], "Style/StringLiterals");
    }

    #[test]
    fn test_checker_runs_on_default_run_and_merges() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::create_dir_all(root.join("Library/Homebrew/utils")).unwrap();
        fs::write(root.join("bin/brew"), "#!/bin/bash\n").unwrap();
        fs::write(root.join("Library/Homebrew/utils/lock.sh"), "").unwrap();
        let checker = root.join("fake-shellcheck");
        fs::write(&checker, "").unwrap();

        let rb = root.join("Library/Homebrew/global.rb");
        let sh = root.join("Library/Homebrew/utils/lock.sh");
        let checker_payload = format!(
            r#"[{{"file": "{}", "line": 1, "endLine": 1, "column": 1, "endColumn": 5,
                "level": "warning", "code": 2034, "message": "foo appears unused.", "fix": null}}]"#,
            sh.display()
        );
        let runner = FakeRunner::default()
            .respond(0, r#"{"files": []}"#)
            .respond(1, &checker_payload);
        let settings = StyleSettings {
            checker: Some(checker.clone()),
            ..settings(root)
        };
        let check = StyleCheck::with_runner(settings, runner);
        let report = check
            .check(&[], &StyleOptions::default(), OutputMode::Structured)
            .unwrap();

        assert_eq!(report.outcome, RunOutcome::Violations);
        assert_eq!(report.auxiliary, AuxiliaryStatus::Ran(RunOutcome::Violations));
        let result = report.result.unwrap();
        assert!(result.lookup(&rb).is_empty());
        assert_eq!(result.lookup(&sh)[0].rule_id, "SC2034");

        let calls = check.runner.calls.borrow();
        assert_eq!(calls[1].program, checker);
        let args = calls[1].arg_strings();
        assert_eq!(&args[..3], &["--format=json", "--shell=bash", "--"]);
        assert_eq!(args[3], root.join("bin/brew").display().to_string());
        assert_eq!(args[4], sh.display().to_string());
    }

    #[test]
    fn test_reset_cache_removes_style_cache() {
        let dir = tempdir().unwrap();
        let settings = settings(dir.path());
        let cache = settings.style_cache();
        fs::create_dir_all(cache.join("rubocop_cache")).unwrap();
        let check = StyleCheck::with_runner(settings, FakeRunner::default().respond(0, ""));
        let options = StyleOptions {
            reset_cache: true,
            ..StyleOptions::default()
        };
        check.check(&[], &options, OutputMode::Print).unwrap();
        assert!(!cache.exists());
    }

    #[test]
    fn test_spawn_failure_carries_command() {
        let dir = tempdir().unwrap();
        let check = StyleCheck::with_runner(settings(dir.path()), FakeRunner::default());
        let err = check
            .check(&[], &StyleOptions::default(), OutputMode::Print)
            .unwrap_err();
        match err {
            StyleError::Spawn { command, .. } => assert!(command.contains("rubocop")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
