//! CLI argument parsing via `clap`.

use crate::models::ItemKind;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "desclint",
    version,
    about = "Description audits and external linter runs",
    long_about = "Desclint — audit and auto-correct package descriptions, and run the repository's style linters with one aggregated report.\n\nConfiguration precedence: CLI > desclint.toml > defaults.",
    after_help = "Examples:\n  desclint audit --name wget --desc \"Internet file retriever\"\n  desclint audit --manifest descs.toml --fix --output json\n  desclint correct --name tool '\"a Command line tool.\"'\n  desclint style --except Layout/LineLength\n  desclint style --fix Formula/wget.rb",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Formula,
    Cask,
}

impl From<KindArg> for ItemKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Formula => ItemKind::Formula,
            KindArg::Cask => ItemKind::Cask,
        }
    }
}

#[derive(Subcommand)]
/// Supported subcommands for auditing, correcting, and style runs.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current desclint version.")]
    Version,
    /// Audit descriptions
    #[command(
        about = "Audit descriptions",
        long_about = "Check one description (--name/--desc) or every entry of a TOML/JSON manifest against the description rules. Problems contribute to CI exits.",
        after_help = "Examples:\n  desclint audit --name foo --kind cask --desc \"A tool.\"\n  desclint audit --manifest descs.toml --fix"
    )]
    Audit {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, conflicts_with_all = ["name", "desc"], help = "Manifest of [[entries]] with kind/name/desc")]
        manifest: Option<String>,
        #[arg(long, value_enum, default_value = "formula", help = "Item kind for a single audit")]
        kind: KindArg,
        #[arg(long, required_unless_present = "manifest", help = "Item name for a single audit")]
        name: Option<String>,
        #[arg(long, help = "Description text; omit to audit a missing description")]
        desc: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Also report corrected descriptions")]
        fix: bool,
    },
    /// Correct a quoted description token
    #[command(
        about = "Correct a description token",
        long_about = "Rewrite a quoted description literal so it passes the description rules. Prints the token unchanged when it already passes or cannot be corrected.",
        after_help = "Examples:\n  desclint correct --name foo '\"A foo tool.\"'"
    )]
    Correct {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Item name the description belongs to")]
        name: String,
        #[arg(help = "Quoted description literal, quotes included")]
        source: String,
    },
    /// Run external linters
    #[command(
        about = "Run style linters",
        long_about = "Run the primary linter over FILES (default: the configured root). Without FILES the shell checker also runs over the entry point and shell utilities.",
        after_help = "Examples:\n  desclint style\n  desclint style --only Desc Formula/wget.rb\n  desclint style --output concise --display-cop-names"
    )]
    Style {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json|concise (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Auto-correct offenses (disables parallel mode)")]
        fix: bool,
        #[arg(long, value_delimiter = ',', conflicts_with = "except", help = "Only run these rules or departments")]
        only: Vec<String>,
        #[arg(long, value_delimiter = ',', help = "Skip these rules or departments")]
        except: Vec<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Extra details and rule names")]
        verbose: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Show rule names in offenses")]
        display_cop_names: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Remove the style cache before running")]
        reset_cache: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Forward --debug to the linter")]
        debug: bool,
        #[arg(help = "Files or directories to check")]
        files: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_filters_are_comma_delimited_and_exclusive() {
        let cli = Cli::try_parse_from(["desclint", "style", "--only", "Desc,Layout", "a.rb"]).unwrap();
        match cli.cmd {
            Commands::Style { only, files, .. } => {
                assert_eq!(only, vec!["Desc", "Layout"]);
                assert_eq!(files, vec!["a.rb"]);
            }
            _ => panic!("expected style"),
        }
        assert!(
            Cli::try_parse_from(["desclint", "style", "--only", "Desc", "--except", "Layout"])
                .is_err()
        );
    }

    #[test]
    fn test_audit_requires_name_or_manifest() {
        assert!(Cli::try_parse_from(["desclint", "audit"]).is_err());
        assert!(Cli::try_parse_from(["desclint", "audit", "--manifest", "m.toml", "--name", "x"]).is_err());
        let cli = Cli::try_parse_from(["desclint", "audit", "--name", "foo", "--kind", "cask"]).unwrap();
        match cli.cmd {
            Commands::Audit { kind, desc, .. } => {
                assert_eq!(kind, KindArg::Cask);
                assert!(desc.is_none());
            }
            _ => panic!("expected audit"),
        }
    }
}
