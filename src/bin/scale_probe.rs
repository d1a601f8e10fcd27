use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use target_window::utils::{brute_force_longest, span_sum};
use target_window::{longest_prefix_sum, longest_window, Span, TargetEngine};

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
    eprintln!("Longest-Target-Subarray Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs each strategy on deterministic sequences of growing length to verify:");
    eprintln!(
        "  • Correctness: spans match a brute-force oracle (up to length {})",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time grows linearly with length");
    eprintln!();
    eprintln!("Metrics:");
    eprintln!("  • wall_s: wall-clock seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches oracle, 'not_checked' = too large to verify");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Sliding window (non-negative input)...");
    measurements.extend(run_scenario(&options, &mut sys, Scenario::Windowed));
    eprintln!();

    eprintln!("[2/3] Prefix sums (signed input)...");
    measurements.extend(run_scenario(&options, &mut sys, Scenario::PrefixSum));
    eprintln!();

    eprintln!("[3/3] Engine auto-selection (mixed input)...");
    measurements.extend(run_scenario(&options, &mut sys, Scenario::Engine));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
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
        let mut verify_limit = 4096usize;

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
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum sequence length to verify against the brute-force oracle (default: 4096)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --bin scale_probe -- --format table --verify-limit 1024
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

#[derive(Copy, Clone)]
enum Scenario {
    Windowed,
    PrefixSum,
    Engine,
}

impl Scenario {
    fn label(self) -> &'static str {
        match self {
            Scenario::Windowed => "windowed",
            Scenario::PrefixSum => "prefix_sum",
            Scenario::Engine => "engine_auto",
        }
    }

    fn input(self, len: usize) -> Vec<i64> {
        match self {
            Scenario::Windowed => deterministic_non_negative(len),
            Scenario::PrefixSum => deterministic_signed(len),
            Scenario::Engine => {
                let mut data = deterministic_non_negative(len);
                if let Some(last) = data.last_mut() {
                    *last = -1;
                }
                data
            }
        }
    }

    fn search(self, sequence: &[i64], target: i64) -> Result<Span, String> {
        match self {
            Scenario::Windowed => longest_window(sequence, target).map_err(|e| e.to_string()),
            Scenario::PrefixSum => Ok(longest_prefix_sum(sequence, target)),
            Scenario::Engine => Ok(TargetEngine::new(sequence).run(target)),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
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

fn run_scenario(options: &Options, sys: &mut System, scenario: Scenario) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1_024, 4_096, 16_384, 65_536, 262_144, 1_048_576];
    const TARGET: i64 = 24;
    let total = SIZES.len();

    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing len {}... ", idx + 1, total, len);
            let sequence = scenario.input(len);
            // Only the search itself is timed; verification runs afterwards.
            let (mut m, outcome) = measure(scenario.label(), format!("len={len}"), sys, || {
                scenario.search(&sequence, TARGET)
            });
            let found = outcome.as_ref().copied().unwrap_or(Span::EMPTY);
            let (status, detail) = verify(&sequence, TARGET, outcome, options.verify_limit);
            m.verification_status = status;
            m.verification_detail = detail;
            eprintln!(
                "{} span={}..{}, len={}, time={:.4}s, status={}",
                m.verification_status.icon(),
                found.start,
                found.end,
                found.len(),
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

/// Check a search outcome: against the oracle up to `verify_limit` elements,
/// and for the target sum only beyond that.
fn verify(
    sequence: &[i64],
    target: i64,
    outcome: Result<Span, String>,
    verify_limit: usize,
) -> (VerificationStatus, Option<String>) {
    let span = match outcome {
        Ok(span) => span,
        Err(err) => return (VerificationStatus::Failed, Some(err)),
    };

    if sequence.len() <= verify_limit {
        let baseline = brute_force_longest(sequence, target);
        if baseline == span {
            (VerificationStatus::Passed, None)
        } else {
            (
                VerificationStatus::Failed,
                Some(format!("expected {baseline:?}, got {span:?}")),
            )
        }
    } else if !span.is_empty() && span_sum(sequence, span) != i128::from(target) {
        (
            VerificationStatus::Failed,
            Some(format!("span {span:?} does not sum to {target}")),
        )
    } else {
        (VerificationStatus::NotChecked, None)
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

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
    eprintln!("Verification Results:");
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (len > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("Timing by Scenario:");
    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let min_time = ms.iter().map(|m| m.wall_s).fold(f64::INFINITY, f64::min);
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}:");
        eprintln!("    Runs: {}", ms.len());
        eprintln!("    Time: min={min_time:.4}s, max={max_time:.4}s");
        eprintln!("    Memory: max_delta={max_mem} KiB");
    }
    eprintln!();

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified runs passed.");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F, R>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> (Measurement, R)
where
    F: FnOnce() -> R,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let result = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let measurement = Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: VerificationStatus::NotChecked,
        verification_detail: None,
    };
    (measurement, result)
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.6},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.6}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        // Bytes on every platform sysinfo supports.
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

/// Small non-negative values with periodic zero runs.
fn deterministic_non_negative(len: usize) -> Vec<i64> {
    (0..len)
        .map(|i| if i % 97 < 5 { 0 } else { ((i * 7) % 11) as i64 })
        .collect()
}

/// Values in `-5..=5`, drifting so long balanced runs exist.
fn deterministic_signed(len: usize) -> Vec<i64> {
    (0..len).map(|i| ((i * 13 + i / 7) % 11) as i64 - 5).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_untimed_verification_slot() {
        let mut sys = System::new();
        let data = deterministic_non_negative(64);
        let (m, outcome) = measure("windowed", "len=64".to_string(), &mut sys, || {
            Scenario::Windowed.search(&data, 24)
        });
        assert!(matches!(m.verification_status, VerificationStatus::NotChecked));
        assert!(m.verification_detail.is_none());
        assert_eq!(outcome, Ok(brute_force_longest(&data, 24)));
    }

    #[test]
    fn verify_against_oracle_within_limit() {
        let data = [1, 2, 3];
        let (status, detail) = verify(&data, 5, Ok(Span::new(1, 3)), 16);
        assert!(matches!(status, VerificationStatus::Passed));
        assert!(detail.is_none());

        let (status, detail) = verify(&data, 5, Ok(Span::new(0, 2)), 16);
        assert!(matches!(status, VerificationStatus::Failed));
        assert!(detail.is_some());
    }

    #[test]
    fn verify_beyond_limit_checks_sum_only() {
        let data = [1, 2, 3];
        let (status, _) = verify(&data, 5, Ok(Span::new(1, 3)), 0);
        assert!(matches!(status, VerificationStatus::NotChecked));
        let (status, _) = verify(&data, 5, Ok(Span::new(0, 1)), 0);
        assert!(matches!(status, VerificationStatus::Failed));
        let (status, detail) = verify(&data, 5, Err("negative".to_string()), 16);
        assert!(matches!(status, VerificationStatus::Failed));
        assert_eq!(detail.as_deref(), Some("negative"));
    }
}
