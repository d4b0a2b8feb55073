//! Lookup subcommands: class index to label and label to class index.

use anyhow::Context;
use clap::Args;

use action_labels::LabelRegistry;

/// Arguments for the name subcommand
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Zero-based class index, e.g. the argmax of the model output.
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

/// Arguments for the index subcommand
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Label to look up, matched exactly.
    pub name: String,
}

fn name(args: &NameArgs, registry: &LabelRegistry) -> anyhow::Result<String> {
    let label = registry
        .name_at_signed(args.index)
        .with_context(|| format!("cannot resolve class index {}", args.index))?;
    Ok(label.to_string())
}

fn index(args: &IndexArgs, registry: &LabelRegistry) -> anyhow::Result<usize> {
    registry
        .index_of(&args.name)
        .with_context(|| format!("cannot resolve label {:?}", args.name))
}

/// Run the name subcommand
pub fn run_name(args: &NameArgs, registry: &LabelRegistry) -> anyhow::Result<()> {
    println!("{}", name(args, registry)?);
    Ok(())
}

/// Run the index subcommand
pub fn run_index(args: &IndexArgs, registry: &LabelRegistry) -> anyhow::Result<()> {
    println!("{}", index(args, registry)?);
    Ok(())
}
