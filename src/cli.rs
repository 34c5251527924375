//! Command-line front end for the `lis` binary.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::input::read_sequence;
use crate::problems::patience::patience_witness;
use crate::strategies::Strategy;
use crate::utils::witness_values;

#[derive(Debug, Clone, Parser)]
#[command(name = "lis")]
#[command(about = "Print the length of the longest strictly increasing subsequence of one line of integers read from stdin")]
pub struct CliConfig {
    /// Formulation used to compute the length.
    #[arg(long, value_enum, env = "LIS_STRATEGY", default_value_t = Strategy::Patience)]
    pub strategy: Strategy,

    /// Also print the values of one longest subsequence on a second line.
    #[arg(long)]
    pub witness: bool,

    /// Cross-check every strategy and fail if any disagrees.
    #[arg(long)]
    pub verify: bool,

    /// Longest input the exponential recursion is allowed to run on.
    #[arg(long, default_value_t = 25)]
    pub max_recursive_len: usize,

    /// Longest input the O(n²) strategies (memoized, quadratic) are allowed to run on.
    #[arg(long, default_value_t = 10_000)]
    pub max_quadratic_len: usize,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("recursive strategy refused: input has {len} elements, limit is {limit} (use --max-recursive-len to raise it)")]
    RecursionTooLong { len: usize, limit: usize },

    #[error("{strategy} strategy refused: input has {len} elements, limit is {limit} (use --max-quadratic-len to raise it)")]
    QuadraticTooLong {
        strategy: Strategy,
        len: usize,
        limit: usize,
    },

    #[error("strategies disagree: {strategy} returned {got}, {reference} returned {expected}")]
    Mismatch {
        strategy: Strategy,
        got: usize,
        reference: Strategy,
        expected: usize,
    },
}

/// Install a compact stderr subscriber. `RUST_LOG` wins when set.
pub fn init_logger(verbose: bool) {
    let default = if verbose { "lis_dp=debug" } else { "lis_dp=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

/// Read one line from `input`, compute, and write the answer to `output`.
pub fn run<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let seq = read_sequence(input).context("could not read the input sequence")?;
    tracing::debug!(len = seq.len(), strategy = %config.strategy, "computing LIS length");

    if config.strategy.is_exponential() && seq.len() > config.max_recursive_len {
        tracing::warn!(
            len = seq.len(),
            limit = config.max_recursive_len,
            "input too long for the plain recursion"
        );
        return Err(CliError::RecursionTooLong {
            len: seq.len(),
            limit: config.max_recursive_len,
        }
        .into());
    }
    if config.strategy.is_quadratic() && seq.len() > config.max_quadratic_len {
        tracing::warn!(
            len = seq.len(),
            limit = config.max_quadratic_len,
            strategy = %config.strategy,
            "input too long for an O(n^2) strategy"
        );
        return Err(CliError::QuadraticTooLong {
            strategy: config.strategy,
            len: seq.len(),
            limit: config.max_quadratic_len,
        }
        .into());
    }

    let len = config.strategy.solve(&seq);

    if config.verify {
        verify(&seq, config, len)?;
    }

    writeln!(output, "{len}")?;
    if config.witness {
        let values = witness_values(&seq, &patience_witness(&seq));
        let line = values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(output, "{line}")?;
    }
    output.flush()?;
    Ok(())
}

/// Strategies `--verify` runs on `seq`, minus the reference and anything
/// over its length limit.
fn verification_set(seq: &[i64], config: &CliConfig) -> Vec<Strategy> {
    Strategy::ALL
        .into_iter()
        .filter(|&strategy| strategy != config.strategy)
        .filter(|&strategy| {
            let too_long = (strategy.is_exponential() && seq.len() > config.max_recursive_len)
                || (strategy.is_quadratic() && seq.len() > config.max_quadratic_len);
            if too_long {
                tracing::info!(%strategy, "skipped during verification: input too long");
            }
            !too_long
        })
        .collect()
}

fn verify(seq: &[i64], config: &CliConfig, expected: usize) -> Result<(), CliError> {
    let reference = config.strategy;
    for strategy in verification_set(seq, config) {
        let got = strategy.solve(seq);
        tracing::debug!(%strategy, got, "verification result");
        if got != expected {
            return Err(CliError::Mismatch {
                strategy,
                got,
                reference,
                expected,
            });
        }
    }
    Ok(())
}
