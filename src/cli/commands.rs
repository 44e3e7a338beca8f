use crate::analyzers::{DashboardView, DatasetSummary, QualityReport, Selection};
use crate::cli::args::{Cli, Commands};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::{Dataset, Season};
use crate::readers::DatasetCache;
use crate::utils::progress::ProgressReporter;
use crate::writers::{DashboardWriter, OutputFormat};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so dashboard output on stdout stays clean.
/// `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    let config = DashboardConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Show {
            data,
            years,
            seasons,
            rows,
            format,
        } => {
            let seasons = seasons
                .iter()
                .map(|s| Season::parse(s))
                .collect::<Result<Vec<_>>>()?;

            let dataset = load_dataset(&data_path(data, &config), format == OutputFormat::Json)?;
            let selection = Selection::narrowed(&dataset, &years, &seasons);
            info!("{}", selection.describe());

            let view = DashboardView::build(&dataset, selection);
            if view.is_empty() {
                warn!("Selection matched no records");
            }

            let writer = DashboardWriter::new()
                .with_preview_rows(rows.unwrap_or(config.preview_rows))
                .with_bar_width(config.bar_width);
            println!("{}", writer.render(&view, format)?);
        }

        Commands::Info { data } => {
            let dataset = load_dataset(&data_path(data, &config), false)?;
            let summary = DatasetSummary::from_dataset(&dataset);
            println!("\n{}", summary.summary());
        }

        Commands::Validate { data } => {
            let dataset = load_dataset(&data_path(data, &config), false)?;
            let report = QualityReport::check(&dataset);
            println!("\n{}", report.summary());

            if report.is_clean() {
                println!("✅ All records passed validation checks");
            } else {
                println!("⚠️  Found {} validation issues", report.issues.len());
            }
        }
    }

    Ok(())
}

fn data_path(flag: Option<PathBuf>, config: &DashboardConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.data_path.clone())
}

fn load_dataset(path: &Path, silent: bool) -> Result<Dataset> {
    let progress = ProgressReporter::new_spinner(&format!("Loading {}...", path.display()), silent);

    match DatasetCache::global().get_or_load(path) {
        Ok(dataset) => {
            progress.finish_with_message(&format!("Loaded {} records", dataset.len()));
            Ok(dataset)
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}
