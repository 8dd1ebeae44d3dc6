use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

mod terminal;

use anyhow::Context;
use clap::ArgAction;
use doclint::{Config, Report};
use terminal::Colors;
use tracing::instrument;

/// The config file read when `--config` is not given, if it exists.
const DEFAULT_CONFIG: &str = "lint-docs.toml";

/// Validate a documentation tree before it is published
///
/// Checks every file under the documentation root for lower-case paths,
/// markdown extensions, resolvable links, in-body top level headings and a
/// front matter title. Exits with status 1 if any violation is found.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The path to the root of the documentation tree [default: docs]
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// The config file to read [default: lint-docs.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exempt links under this prefix (e.g. `configs/`) from link checks
    ///
    /// Can be given multiple times. Adds to any prefixes in the config file.
    #[arg(long = "asset-prefix", value_name = "PREFIX")]
    asset_prefixes: Vec<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Summary,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        Self::setup_logging(self.verbose);

        let config = self.config()?;
        let report = doclint::lint_tree(&config)
            .with_context(|| format!("failed to lint {}", config.root.display()))?;

        self.print(&report)?;

        Ok(exit_code(&report))
    }

    #[instrument(level = "debug", skip(self))]
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => load_config(Path::new(DEFAULT_CONFIG))?,
            None => {
                tracing::debug!("No {DEFAULT_CONFIG} found, using defaults");
                Config::default()
            }
        };

        if let Some(root) = &self.root {
            config.root.clone_from(root);
        }
        for prefix in &self.asset_prefixes {
            config.add_asset_prefix(prefix.clone());
        }

        Ok(config)
    }

    fn print(&self, report: &Report) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Text => print!("{}", report.render_text(&Colors::detect(self.no_color))),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.to_json())?),
            OutputFormat::Summary => println!("{}", report.render_summary()),
        }
        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the report
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load(path).with_context(|| format!("failed to load config from {}", path.display()))
}

/// Violations fail the run; a clean tree succeeds.
fn exit_code(report: &Report) -> ExitCode {
    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use doclint::{FileReport, Violation};

    use super::*;

    #[test]
    fn cli_flags_override_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("custom.toml");
        std::fs::write(
            &config_path,
            "_version = \"1\"\nroot = \"site\"\nasset_prefixes = [\"downloads/\"]\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "lint-docs",
            "--config",
            config_path.to_str().unwrap(),
            "--root",
            "elsewhere",
            "--asset-prefix",
            "configs/",
        ])
        .unwrap();
        let config = cli.config().unwrap();

        assert_eq!(config.root, PathBuf::from("elsewhere"));
        assert_eq!(
            config.asset_prefixes(),
            &["downloads/".to_string(), "configs/".to_string()]
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let cli =
            Cli::try_parse_from(["lint-docs", "--config", missing.to_str().unwrap()]).unwrap();

        assert!(cli.config().is_err());
    }

    #[test]
    fn output_format_is_parsed() {
        let cli = Cli::try_parse_from(["lint-docs", "--output", "json", "-vv"]).unwrap();

        assert!(matches!(cli.output, OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["lint-docs", "--output", "xml"]).is_err());
    }

    #[test]
    fn violations_map_to_failure() {
        let clean = Report::new(vec![FileReport::clean("a.md".to_string())]);
        let dirty = Report::new(vec![FileReport::new(
            "B.md".to_string(),
            vec![Violation::UpperCasePath],
        )]);

        assert_eq!(format!("{:?}", exit_code(&clean)), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(format!("{:?}", exit_code(&dirty)), format!("{:?}", ExitCode::FAILURE));
    }
}
