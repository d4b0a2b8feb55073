//! Action label lookups from the command line
//!
//! This binary resolves class indices to action labels and back for a
//! built-in label set or a label file.

mod cmd_list;
mod cmd_lookup;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use action_labels::{LabelSet, LabelSource};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Built-in label set to use.
    #[arg(long, value_enum, default_value_t = LabelSet::Kinetics400, global = true)]
    which: LabelSet,

    /// Label file (JSON array or one label per line), overrides --which.
    #[arg(long, global = true)]
    labels: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of labels.
    Count,
    /// Print the label for a class index.
    Name(cmd_lookup::NameArgs),
    /// Print the class index of a label.
    Index(cmd_lookup::IndexArgs),
    /// Print every label with its class index.
    List(cmd_list::ListArgs),
    /// Print the label set fingerprint.
    Fingerprint,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = LabelSource::new(args.which, args.labels.clone());
    let registry = source
        .load()
        .with_context(|| format!("failed to load label set {source}"))?;
    info!(%source, labels = registry.len(), "label set ready");

    match &args.command {
        Command::Count => cmd_list::run_count(&registry),
        Command::Name(cmd_args) => cmd_lookup::run_name(cmd_args, &registry)?,
        Command::Index(cmd_args) => cmd_lookup::run_index(cmd_args, &registry)?,
        Command::List(cmd_args) => cmd_list::run(cmd_args, &registry)?,
        Command::Fingerprint => cmd_list::run_fingerprint(&registry),
    }

    Ok(())
}
