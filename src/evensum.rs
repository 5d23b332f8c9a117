use anyhow::{Result, anyhow};
use std::io::{BufRead, Write};

pub const INPUT_PROMPT: &str = "Enter a number: ";

/// Sum of every even integer `k` with `2 <= k <= bound`.
///
/// An empty sequence (any `bound` below 2) sums to 0. An odd `bound` tops
/// out at `bound - 1`.
pub fn sum_of_even_numbers(bound: i64) -> i64 {
    (2..=bound).step_by(2).sum()
}

/// Prompt for a bound on `output`, read one line from `input`, and write the
/// even-number sum as a single line.
///
/// A line that does not parse as a base-10 integer is the only error beyond
/// plain IO failures; it propagates to the caller without producing a sum
/// line.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    write!(output, "{INPUT_PROMPT}")
        .map_err(|err| anyhow!("Failed to write prompt to output: {err}"))?;
    output
        .flush()
        .map_err(|err| anyhow!("Failed to flush prompt to output: {err}"))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|err| anyhow!("Failed to read bound from input: {err}"))?;
    let bound = parse_bound(&line)?;

    writeln!(
        output,
        "Sum of even numbers from 1 to {bound} is: {}",
        sum_of_even_numbers(bound)
    )
    .map_err(|err| anyhow!("Failed to write sum to output: {err}"))?;

    Ok(())
}

fn parse_bound(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|err| anyhow!("Failed to parse bound '{trimmed}': {err}"))
}
