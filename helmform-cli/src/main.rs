//! Helmform CLI — merge and inspect Helm values form trees.
//!
//! Commands:
//! - `merge` — fuse temporary slider endpoints into range sliders and write
//!   the merged tree as JSON
//! - `inspect` — report node counts and any temporary sliders left unpaired

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use helmform_core::{
    temporary_sliders, EndpointAgreement, FormDocument, HelmformConfig, MergeReport,
    RangeSliderMerger, TreeStats,
};

#[derive(Parser)]
#[command(
    name = "helmform",
    about = "Helmform CLI — range-slider merging for Helm values forms"
)]
struct Cli {
    /// Log at DEBUG level. Without it, RUST_LOG decides (default: warn).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge temporary slider endpoints and write the resulting tree.
    Merge {
        /// Form tree as JSON (a node or an array of nodes). Use `-` for stdin.
        input: PathBuf,

        /// Write the merged tree here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fail when the endpoints of a pair disagree on unit, step or bounds.
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Indent the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print node counts and unpaired temporary sliders.
    Inspect {
        /// Form tree as JSON. Use `-` for stdin.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Merge {
            input,
            output,
            config,
            strict,
            pretty,
        } => run_merge(&input, output.as_deref(), config.as_deref(), strict, pretty),
        Commands::Inspect { input } => run_inspect(&input),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(input: &Path) -> Result<FormDocument> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read form tree from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("read form tree {}", input.display()))?
    };
    FormDocument::from_json(&content)
        .with_context(|| format!("malformed form tree in {}", input.display()))
}

fn run_merge(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    strict: bool,
    pretty: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => HelmformConfig::from_file(path)?,
        None => HelmformConfig::default(),
    };
    if strict {
        config.merge.endpoint_agreement = EndpointAgreement::Strict;
    }
    let pretty = pretty || config.output.pretty;

    let mut doc = read_document(input)?;
    let merger = RangeSliderMerger::new(config.merge);
    let report = merger
        .merge_document(&mut doc)
        .context("malformed configuration: form tree could not be merged")?;
    tracing::debug!(
        pairs = report.pairs_merged,
        unpaired = report.unpaired_sliders,
        "merge finished"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("write merged tree {}", path.display()))?,
        None => println!("{json}"),
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &MergeReport) {
    eprintln!(
        "Merged {} pair(s) across {} group(s)",
        report.pairs_merged, report.groups_visited
    );
    if !report.merged_range_ids.is_empty() {
        eprintln!("  Ranges: {}", report.merged_range_ids.join(", "));
    }
    if report.unpaired_sliders > 0 {
        eprintln!("  Unpaired sliders left in place: {}", report.unpaired_sliders);
    }
}

fn run_inspect(input: &Path) -> Result<()> {
    let doc = read_document(input)?;
    let stats = TreeStats::collect_forest(doc.nodes());

    println!("{:<20} {}", "Groups:", stats.groups);
    println!("{:<20} {}", "Fields:", stats.fields());
    println!("{:<20} {}", "  Range sliders:", stats.range_sliders);
    println!("{:<20} {}", "  Temporary sliders:", stats.temporary_sliders);
    println!("{:<20} {}", "  Other fields:", stats.other_fields);
    println!("{:<20} {}", "Max depth:", stats.max_depth);

    let remaining = temporary_sliders(doc.nodes());
    if !remaining.is_empty() {
        println!();
        println!("Temporary sliders:");
        for location in remaining {
            let group = if location.group_path.is_empty() {
                "<top level>".to_string()
            } else {
                location.group_path.join(".")
            };
            println!(
                "  {group}: {} ({})",
                location.slider.slider_range_id, location.slider.slider_extremity
            );
        }
    }
    Ok(())
}
