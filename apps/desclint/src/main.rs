//! Desclint CLI binary entry point.
//! Delegates to the library for audits, corrections, and style runs, then
//! prints results. Exit codes: 0 clean, 1 findings, 2 errors.

use clap::Parser;
use desclint::audit;
use desclint::cli::{Cli, Commands};
use desclint::config::{self, Effective};
use desclint::desc::{DescriptionCorrector, DescriptionToken};
use desclint::models::manifest::AuditEntry;
use desclint::output;
use desclint::style::{OutputMode, RuleFilter, RunMode, RunOutcome, StyleCheck, StyleOptions};
use desclint::utils;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("DESCLINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(msg: impl Display) -> ! {
    eprintln!("{} {}", utils::error_prefix(), msg);
    exit(2);
}

fn effective(repo_root: Option<&str>, output: Option<&str>, allowed: &[&str]) -> Effective {
    let mut eff = config::resolve_effective(repo_root, output).unwrap_or_else(|e| fail(e));
    if !allowed.contains(&eff.output.as_str()) {
        eprintln!(
            "{} Unknown output mode '{}'; using human.",
            utils::warn_prefix(),
            eff.output
        );
        eff.output = "human".to_string();
    }
    if !eff.config_found && eff.output != "json" {
        eprintln!("{} No desclint.toml found; using defaults.", utils::note_prefix());
    }
    eff
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Audit {
            repo_root,
            output,
            manifest,
            kind,
            name,
            desc,
            fix,
        } => {
            let eff = effective(repo_root.as_deref(), output.as_deref(), &["human", "json"]);
            let entries = match (manifest, name) {
                (Some(path), _) => {
                    let path = resolve_against(&eff.repo_root, &path);
                    let m = audit::load_manifest(&path).unwrap_or_else(|e| fail(e));
                    if eff.output != "json" {
                        eprintln!(
                            "{} Auditing {} entries from {}",
                            utils::info_prefix(),
                            m.entries.len(),
                            path.display()
                        );
                    }
                    m.entries
                }
                (None, Some(name)) => vec![AuditEntry {
                    kind: kind.into(),
                    name,
                    desc,
                }],
                (None, None) => fail("pass --name or --manifest"),
            };
            let report = audit::run_audit(&entries, &eff.rulebook, fix);
            output::print_audit(&report, &eff.output);
            if report.has_problems() {
                exit(1);
            }
        }
        Commands::Correct {
            repo_root,
            output,
            name,
            source,
        } => {
            let eff = effective(repo_root.as_deref(), output.as_deref(), &["human", "json"]);
            let token = DescriptionToken::from_source(source.as_str());
            let corrector = DescriptionCorrector::new(eff.rulebook);
            let corrected = corrector
                .correct(&name, &token)
                .and_then(|r| r.apply(token.source()));
            output::print_correction(&source, corrected.as_deref(), &eff.output);
        }
        Commands::Style {
            repo_root,
            output,
            fix,
            only,
            except,
            verbose,
            display_cop_names,
            reset_cache,
            debug,
            files,
        } => {
            let eff = effective(
                repo_root.as_deref(),
                output.as_deref(),
                &["human", "json", "concise"],
            );
            let filter = if !only.is_empty() {
                RuleFilter::Only(only)
            } else if !except.is_empty() {
                RuleFilter::Except(except)
            } else {
                RuleFilter::All
            };
            let options = StyleOptions {
                mode: if fix { RunMode::Fix } else { RunMode::Parallel },
                filter,
                verbose,
                display_cop_names,
                debug,
                reset_cache,
                color: utils::colors_enabled(),
                ci: utils::on_ci(),
            };
            let mode = match eff.output.as_str() {
                "human" => OutputMode::Print,
                _ => OutputMode::Structured,
            };
            let files: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
            let check = StyleCheck::new(eff.style);
            let report = check
                .check(&files, &options, mode)
                .unwrap_or_else(|e| fail(e));
            output::print_style(&report, &eff.output, display_cop_names || verbose);
            match report.outcome {
                RunOutcome::Clean => {}
                RunOutcome::Violations => exit(1),
                RunOutcome::ExecutionError => exit(2),
            }
        }
    }
}

fn resolve_against(root: &Path, p: &str) -> PathBuf {
    let path = Path::new(p);
    if path.is_absolute() || path.exists() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
