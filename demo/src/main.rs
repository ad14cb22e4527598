mod args;

use anyhow::Context;
use args::{Args, DEFAULT_RANGES};
use clap::Parser;
use persistent_tree::PersistentSegmentTree;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo=info,persistent_tree=info".into()),
        )
        .init();

    let args = Args::parse();
    let ranges = if args.ranges.is_empty() {
        DEFAULT_RANGES.to_vec()
    } else {
        args.ranges
    };

    let mut tree = PersistentSegmentTree::from_values(&args.values)
        .context("could not build tree from --values")?;
    info!(len = tree.len(), "built version 0");

    for &(index, value) in &args.sets {
        let version = tree
            .update_latest(index, value)
            .with_context(|| format!("could not apply update {index}={value}"))?;
        info!(%version, index, value, "applied update");
    }

    for version in tree.versions() {
        println!("{version}: {:?}", tree.values(version)?);
        for range in &ranges {
            let sum = tree
                .query(version, range.start, range.end)
                .with_context(|| format!("could not query {}..{}", range.start, range.end))?;
            println!("  sum {}..{} = {}", range.start, range.end, sum);
        }
    }

    if args.dump_json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    }
    Ok(())
}
