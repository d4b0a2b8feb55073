//! Label set summaries: `list`, `count` and `fingerprint`.

use clap::Args;

use action_labels::LabelRegistry;

/// Arguments for the list subcommand
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the labels as a JSON array instead of `index<TAB>label` lines.
    #[arg(long)]
    pub json: bool,
}

fn render(args: &ListArgs, registry: &LabelRegistry) -> anyhow::Result<String> {
    if args.json {
        return Ok(serde_json::to_string_pretty(registry)?);
    }
    let lines: Vec<String> = registry
        .iter()
        .map(|(i, label)| format!("{i}\t{label}"))
        .collect();
    Ok(lines.join("\n"))
}

/// Run the list subcommand
pub fn run(args: &ListArgs, registry: &LabelRegistry) -> anyhow::Result<()> {
    println!("{}", render(args, registry)?);
    Ok(())
}

fn count(registry: &LabelRegistry) -> String {
    registry.len().to_string()
}

fn fingerprint(registry: &LabelRegistry) -> String {
    registry.fingerprint().to_hex()
}

/// Run the count subcommand
pub fn run_count(registry: &LabelRegistry) {
    println!("{}", count(registry));
}

/// Run the fingerprint subcommand
pub fn run_fingerprint(registry: &LabelRegistry) {
    println!("{}", fingerprint(registry));
}
