//! ganttviz CLI - Gantt chart rendering front end
//!
//! Stands in for a visualization host: loads a JSON dataset file, runs one
//! chart update cycle, and writes the resulting SVG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ganttviz_core::{build_tasks, DataTable, TimeDomain, Viewport, WheelPalette};
use ganttviz_render::{BlockLegend, ChartConfig, GanttChart, UpdateOptions};

#[derive(Parser)]
#[command(name = "ganttviz")]
#[command(author, version, about = "Gantt chart layout and SVG rendering", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dataset file and report its shape
    Check {
        /// Input dataset (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Render a dataset to SVG
    Render {
        /// Input dataset (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f64,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 720.0)]
        height: f64,

        /// Legend position (Top, Bottom, Left, Right, ...Center variants)
        #[arg(long)]
        legend_position: Option<String>,

        /// Hide the legend entirely
        #[arg(long)]
        hide_legend: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Render {
            file,
            output,
            width,
            height,
            legend_position,
            hide_legend,
        } => render(&file, output.as_deref(), width, height, legend_position, hide_legend),
    }
}

fn load_table(path: &std::path::Path) -> Result<DataTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a dataset file", path.display()))
}

fn check(file: &std::path::Path) -> Result<()> {
    let table = load_table(file)?;

    let mut palette = WheelPalette::new();
    let tasks = match build_tasks(&table, &mut palette, &Default::default()) {
        Ok(tasks) => tasks,
        Err(err) => bail!("{}: {}", file.display(), err),
    };
    let domain = TimeDomain::from_tasks(&tasks)?;

    println!("{}: ok", file.display());
    println!("  rows:    {}", tasks.len());
    println!(
        "  domain:  [{}, {}] minutes ({} hour ticks)",
        domain.start,
        domain.end,
        domain.tick_count()
    );
    let categories = tasks
        .iter()
        .map(|t| t.name.as_str())
        .collect::<std::collections::BTreeSet<_>>();
    println!("  legend:  {} categories", categories.len());

    Ok(())
}

fn render(
    file: &std::path::Path,
    output: Option<&std::path::Path>,
    width: f64,
    height: f64,
    legend_position: Option<String>,
    hide_legend: bool,
) -> Result<()> {
    let table = load_table(file)?;

    let mut legend = serde_json::Map::new();
    if hide_legend {
        legend.insert("show".into(), serde_json::Value::Bool(false));
    }
    if let Some(position) = legend_position {
        legend.insert("position".into(), serde_json::Value::String(position));
    }
    let objects = serde_json::json!({ "legend": legend });

    let mut chart =
        GanttChart::new(ChartConfig::default()).with_legend_widget(BlockLegend::new());

    let frame = chart.update(&UpdateOptions {
        dataset: Some(table),
        viewport: Viewport::new(width, height),
        objects,
    });

    if frame.is_cleared() {
        tracing::warn!("dataset failed the shape check, writing a cleared chart");
    } else {
        tracing::debug!(
            bars = frame.bars.len(),
            width = frame.size.width,
            "rendered"
        );
    }

    match output {
        Some(path) => std::fs::write(path, &frame.svg)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{}", frame.svg),
    }

    Ok(())
}
