use clap::Parser;

use hexarray_core::parse::{parse_decimal, parse_hex};
use hexarray_core::{SteppedRange, hex_word};

#[derive(Debug, Parser)]
#[command(
    name = "hexgen",
    version,
    about = "Generate an array of hexadecimal values given start, final and step"
)]
struct Cli {
    /// First value, hexadecimal (optional sign and 0x prefix)
    #[arg(value_parser = parse_hex, allow_hyphen_values = true)]
    start: i64,

    /// Last value, hexadecimal; included when reachable by STEP
    #[arg(value_name = "FINAL", value_parser = parse_hex, allow_hyphen_values = true)]
    end: i64,

    /// Distance between consecutive values, decimal; may be negative
    #[arg(value_parser = parse_decimal, allow_hyphen_values = true)]
    step: i64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let values = SteppedRange::inclusive(cli.start, cli.end, cli.step)?;

    let mut count = 0usize;
    for value in values {
        println!("{},", hex_word(value)?);
        count += 1;
    }
    println!("{count}");

    Ok(())
}
