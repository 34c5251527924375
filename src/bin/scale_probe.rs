use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use lis_dp::problems::patience::PatienceProblem;
use lis_dp::strategies::{memoized_lis, patience_lis, quadratic_lis, recursive_lis};
use lis_dp::utils::is_valid_witness;
use lis_dp::LisEngine;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("LIS Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!(
        "  • status: 'passed' = matches the baseline, 'not_checked' = larger than {}",
        options.verify_limit
    );
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/5] Patience (smallest tails, engine forward pass)...");
    measurements.extend(run_patience(&options, &mut sys));
    eprintln!();

    eprintln!("[2/5] Patience witness (checkpointed reconstruction)...");
    measurements.extend(run_witness(&options, &mut sys));
    eprintln!();

    eprintln!("[3/5] Quadratic best[i] table...");
    measurements.extend(run_quadratic(&mut sys));
    eprintln!();

    eprintln!("[4/5] Memoized recursion...");
    measurements.extend(run_memoized(&options, &mut sys));
    eprintln!();

    eprintln!("[5/5] Plain recursion...");
    measurements.extend(run_recursive(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }

    if measurements
        .iter()
        .any(|m| matches!(m.verification_status, VerificationStatus::Failed))
    {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 2048usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --features probe --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input checked against the quadratic baseline (default: 2048)
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn compare(expected: usize, got: usize) -> (VerificationStatus, Option<String>) {
    if expected == got {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {got}")),
        )
    }
}

/// Time `compute` on a fresh pseudo-random input of each size.
fn run_sizes<F>(
    scenario: &'static str,
    sizes: &[usize],
    sys: &mut System,
    mut compute: F,
) -> Vec<Measurement>
where
    F: FnMut(&[i64]) -> (usize, VerificationStatus, Option<String>),
{
    let total = sizes.len();
    sizes
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let seq = deterministic_sequence(len, 0x5eed);
            let mut lis = 0;
            let m = measure(scenario, len, sys, || {
                let (value, status, detail) = compute(&seq);
                lis = value;
                (status, detail)
            });
            eprintln!(
                "{} lis={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                lis,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_patience(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1 << 10, 1 << 12, 1 << 14, 1 << 16, 1 << 18, 1 << 20];
    run_sizes("patience", SIZES, sys, |seq| {
        let got = patience_lis(seq);
        let (status, detail) = if seq.len() <= options.verify_limit {
            compare(quadratic_lis(seq), got)
        } else {
            (VerificationStatus::NotChecked, None)
        };
        (got, status, detail)
    })
}

fn run_witness(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1 << 10, 1 << 12, 1 << 14, 1 << 16, 1 << 18, 1 << 20];
    run_sizes("patience_witness", SIZES, sys, |seq| {
        let (cost, witness) = LisEngine::new(PatienceProblem::new(seq)).run();
        // Witness shape is cheap to check at any size.
        let (status, detail) = if witness.len() != cost || !is_valid_witness(seq, &witness) {
            (
                VerificationStatus::Failed,
                Some(format!("invalid witness of length {}", witness.len())),
            )
        } else if seq.len() <= options.verify_limit {
            compare(quadratic_lis(seq), cost)
        } else {
            (VerificationStatus::Passed, None)
        };
        (cost, status, detail)
    })
}

fn run_quadratic(sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192, 16384];
    run_sizes("quadratic", SIZES, sys, |seq| {
        let got = quadratic_lis(seq);
        // The baseline here is the fast method, so it is always affordable.
        let (status, detail) = compare(patience_lis(seq), got);
        (got, status, detail)
    })
}

fn run_memoized(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[64, 128, 256, 512, 1024, 2048];
    run_sizes("memoized", SIZES, sys, |seq| {
        let got = memoized_lis(seq);
        let (status, detail) = if seq.len() <= options.verify_limit {
            compare(quadratic_lis(seq), got)
        } else {
            (VerificationStatus::NotChecked, None)
        };
        (got, status, detail)
    })
}

fn run_recursive(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[8, 12, 16, 20, 22, 24];
    run_sizes("recursive", SIZES, sys, |seq| {
        let got = recursive_lis(seq);
        let (status, detail) = if seq.len() <= options.verify_limit {
            compare(quadratic_lis(seq), got)
        } else {
            (VerificationStatus::NotChecked, None)
        };
        (got, status, detail)
    })
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failures:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} (len={})", m.scenario, m.size);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     {detail}");
                }
            }
        }
        eprintln!();
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }

    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!(
            "  {scenario}: {} runs, max_time={max_time:.3}s, max_rss_delta={max_mem} KiB",
            ms.len()
        );
        if let (Some(first), Some(last)) = (ms.first(), ms.last()) {
            if ms.len() >= 2 && first.wall_s > 0.0 {
                eprintln!(
                    "    {:.1}x slower from len={} to len={}",
                    last.wall_s / first.wall_s,
                    first.size,
                    last.size
                );
            }
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    println!(
        "{:<col1$}  {:>8}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<col1$}  {:-<8}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.verification_detail.as_ref() {
            Some(d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"size\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|process| process.memory() / 1024)
        .unwrap_or(0)
}

/// Reproducible pseudo-random values in `[-len, len)` from a 64-bit LCG.
fn deterministic_sequence(len: usize, seed: u64) -> Vec<i64> {
    let span = (len.max(1) as u64) * 2;
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % span) as i64 - len as i64
        })
        .collect()
}
