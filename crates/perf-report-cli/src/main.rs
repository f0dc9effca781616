use anyhow::{Context, Result, bail};
use clap::Parser;
use perf_report_config::Config;
use perf_report_engine::{ChartBundle, ReportDocument, compile_report};
use std::{
    fs,
    path::{Path, PathBuf},
};

mod cli;
use cli::{Cli, Commands, ModeArgs};

fn expand(path: &Path) -> PathBuf {
    Config::expand_path(path).unwrap_or_else(|| path.to_path_buf())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(Config::load()?.unwrap_or_else(|| {
            log::debug!(
                "No config at {}, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }));
    };

    let config_path = expand(path);
    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::debug!("Using config from: {}", config_path.display());
            Ok(config)
        }
        None => bail!("Config file not found: {}", config_path.display()),
    }
}

fn read_document(file: &Path, config: &Config, mode: ModeArgs) -> Result<ReportDocument> {
    let file = expand(file);
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read report {}", file.display()))?;

    Ok(ReportDocument::new(text)
        .general_report(mode.is_general(config.general_report))
        .with_palette(config.palette()))
}

fn read_charts(path: &Path) -> Result<ChartBundle> {
    let path = expand(path);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read chart data {}", path.display()))?;
    ChartBundle::from_json(&json)
        .with_context(|| format!("Invalid chart data in {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Compile {
            file,
            charts,
            classification,
            mode,
        } => {
            let mut doc = read_document(&file, &config, mode)?;
            if let Some(charts) = charts {
                doc = doc.with_chart_data(read_charts(&charts)?);
            }
            if let Some(classification) = classification {
                doc = doc.with_classification(classification);
            }

            let report = compile_report(&doc);
            log::info!(
                "Compiled {} into {} blocks",
                file.display(),
                report.blocks.len()
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Outline { file, mode } => {
            let doc = read_document(&file, &config, mode)?;
            for (level, text) in compile_report(&doc).outline() {
                let indent = "  ".repeat(usize::from(level.saturating_sub(1)));
                println!("{indent}{text}");
            }
        }
    }

    Ok(())
}
