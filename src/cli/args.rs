use crate::writers::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bike-dashboard")]
#[command(about = "Explore daily bike-sharing rentals by year, season and weather")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        help = "Configuration file [default: dashboard.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard for the selected years and seasons
    Show {
        #[arg(short, long, help = "Daily rentals CSV [default: from config, day.csv]")]
        data: Option<PathBuf>,

        #[arg(short, long = "year", help = "Year to include (repeatable) [default: all]")]
        years: Vec<i32>,

        #[arg(
            short,
            long = "season",
            help = "Season to include: Spring, Summer, Fall, Winter (repeatable) [default: all]"
        )]
        seasons: Vec<String>,

        #[arg(short, long, help = "Number of preview rows")]
        rows: Option<usize>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarize the dataset
    Info {
        #[arg(short, long, help = "Daily rentals CSV [default: from config, day.csv]")]
        data: Option<PathBuf>,
    },

    /// Check the dataset for unmapped codes and out-of-range values
    Validate {
        #[arg(short, long, help = "Daily rentals CSV [default: from config, day.csv]")]
        data: Option<PathBuf>,
    },
}
