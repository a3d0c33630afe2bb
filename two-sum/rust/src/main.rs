use std::io::{self, Write};

use anyhow::Result;
use tracing::info;
use two_sum::Strategy;

mod infra;

const NUMS: [i32; 4] = [2, 7, 11, 15];
const TARGET: i32 = 9;

fn main() -> Result<()> {
    if let Err(e) = infra::telemetry::init() {
        eprintln!("failed to initialize telemetry: {e}");
    }

    let stdout = io::stdout();
    run(&mut stdout.lock())
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    let strategy = Strategy::default();
    let pair = strategy.find(&NUMS, TARGET)?;

    info!(?strategy, i = pair.i(), j = pair.j(), "solved");

    writeln!(out, "{pair}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_indices() {
        let mut buf = Vec::new();

        run(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 1\n");
    }
}
