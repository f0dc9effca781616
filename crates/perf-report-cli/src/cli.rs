use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "perf-report")]
#[command(author, version)]
#[command(about = "Compiles performance-evaluation reports into structured blocks")]
#[command(after_help = "\
EXAMPLES:

    # Compile a general report with chart data
    perf-report compile report.md --general --charts charts.json

    # Pick the chart accent from a classification
    perf-report compile report.md --classification \"Acima do Esperado\"

    # Print the heading outline
    perf-report outline report.md

CONFIGURATION:

Defaults are read from ~/.config/perf-report/config.toml unless --config is given:

    general_report = true
    default_accent = \"#334155\"

    [accent_colors]
    \"muito bom\" = \"#0d9488\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a report and print its blocks as JSON
    Compile {
        /// Report file to compile
        file: PathBuf,

        /// Chart bundle JSON (radar, bar, hist, gauge, bands)
        #[arg(long)]
        charts: Option<PathBuf>,

        /// Performance classification used to pick the chart accent
        #[arg(long)]
        classification: Option<String>,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Print the heading outline of a report
    Outline {
        /// Report file to read
        file: PathBuf,

        #[command(flatten)]
        mode: ModeArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ModeArgs {
    /// Compile as a general report (callouts, vocabulary, section policy)
    #[arg(long, conflicts_with = "plain")]
    pub general: bool,

    /// Compile as an individual report
    #[arg(long)]
    pub plain: bool,
}

impl ModeArgs {
    /// Command-line flags win over the configured default.
    pub fn is_general(self, config_default: bool) -> bool {
        if self.general {
            true
        } else if self.plain {
            false
        } else {
            config_default
        }
    }
}
