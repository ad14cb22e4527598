use clap::Parser;
use std::ops::Range;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Initial contents of the array (version 0).
    #[arg(
        short,
        long,
        env = "PST_VALUES",
        value_delimiter = ',',
        default_value = "1,2,3,4,5",
        allow_hyphen_values = true
    )]
    pub values: Vec<i64>,

    /// An update `INDEX=VALUE`, applied on top of the latest version.
    ///
    /// May be repeated; every update publishes one new version.
    #[arg(short, long = "set", value_parser = parse_assignment, default_value = "0=2")]
    pub sets: Vec<(usize, i64)>,

    /// A half-open range `START..END` to sum in every version.
    ///
    /// If unset, probes the ranges of the classic 1..=5 smoke test.
    #[arg(short, long = "range", value_parser = parse_range)]
    pub ranges: Vec<Range<usize>>,

    /// Print the final tree, with all of its versions, as JSON.
    #[arg(long)]
    pub dump_json: bool,
}

pub const DEFAULT_RANGES: [Range<usize>; 6] = [0..1, 1..2, 0..2, 0..3, 2..4, 0..5];

fn parse_assignment(arg: &str) -> Result<(usize, i64), String> {
    let (index, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got `{arg}`"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("could not parse index `{index}`: {e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("could not parse value `{value}`: {e}"))?;
    Ok((index, value))
}

fn parse_range(arg: &str) -> Result<Range<usize>, String> {
    let (start, end) = arg
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got `{arg}`"))?;
    let start = start
        .trim()
        .parse()
        .map_err(|e| format!("could not parse range start `{start}`: {e}"))?;
    let end = end
        .trim()
        .parse()
        .map_err(|e| format!("could not parse range end `{end}`: {e}"))?;
    Ok(start..end)
}
