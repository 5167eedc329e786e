//! Scaling probe: runs every traversal over a ladder of sizes, records wall
//! time and resident-memory growth, and checks each distance against a
//! nested-table reference DP.
//!
//! Run with:
//! `cargo run --release --bin scale_probe -- --format table --max-size 2048`

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use wavefront_nw::{
    models::{CostTable, UnitCost},
    AlignmentEngineBuilder, CostModel, Distance, Traversal,
};

#[derive(Parser, Debug)]
#[command(name = "scale_probe")]
#[command(about = "Time and verify every traversal of the alignment engine", long_about = None)]
struct Options {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest sequence length verified against the reference DP
    #[arg(long, value_name = "N", default_value_t = 512)]
    verify_limit: usize,

    /// Largest sequence length probed (sizes double from 256)
    #[arg(long, value_name = "N", default_value_t = 4096)]
    max_size: usize,

    /// Only probe this traversal
    #[arg(long, value_name = "ORDER")]
    traversal: Option<Traversal>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    traversal: Traversal,
    size: usize,
    distance: Option<Distance>,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
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

/// One family of inputs: sequence pair, cost model and the distance the
/// scenario is known to have (if any) regardless of size.
struct Scenario {
    name: &'static str,
    inputs: fn(usize) -> (Vec<u8>, Vec<u8>),
    model: Box<dyn CostModel + Sync>,
    closed_form: Option<fn(usize) -> Distance>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "homopolymer_unit",
            inputs: |len| (vec![b'a'; len], vec![b'b'; len]),
            model: Box::new(UnitCost),
            closed_form: Some(|len| len as Distance),
        },
        Scenario {
            name: "dna_unit",
            inputs: |len| (deterministic_dna(len, 0), deterministic_dna(len + len / 7, 1)),
            model: Box::new(UnitCost),
            closed_form: None,
        },
        Scenario {
            name: "dna_transition_transversion",
            inputs: |len| (deterministic_dna(len, 0), deterministic_dna(len, 2)),
            model: Box::new(CostTable::transition_transversion(1, 2, 3)),
            closed_form: None,
        },
    ]
}

fn main() -> ExitCode {
    let options = Options::parse();
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    let traversals: Vec<Traversal> = match options.traversal {
        Some(t) => vec![t],
        None => Traversal::ALL.to_vec(),
    };
    let sizes: Vec<usize> = std::iter::successors(Some(256usize), |s| s.checked_mul(2))
        .take_while(|&s| s <= options.max_size)
        .collect();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Wavefront alignment scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  traversals:   {}", join(traversals.iter().map(|t| t.as_str())));
    eprintln!("  sizes:        {}", join(sizes.iter().map(|s| s.to_string())));
    eprintln!("  verify limit: {}", options.verify_limit);
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let scenarios = scenarios();
    for (idx, scenario) in scenarios.iter().enumerate() {
        eprintln!("[{}/{}] {}", idx + 1, scenarios.len(), scenario.name);
        for &traversal in &traversals {
            for &size in &sizes {
                eprint!("      {traversal:<10} len={size:<6} ");
                let m = run_one(scenario, traversal, size, &options, &mut sys);
                eprintln!(
                    "{} distance={}, time={:.3}s, status={}",
                    m.verification_status.icon(),
                    m.distance.map_or_else(|| "-".to_string(), |d| d.to_string()),
                    m.wall_s,
                    m.verification_status.label()
                );
                measurements.push(m);
            }
        }
        eprintln!();
    }

    let failed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Failed)
        .count();
    if failed == 0 {
        eprintln!("✓ all checked runs match the reference");
    } else {
        eprintln!("✗ {failed} run(s) failed, see the detail column");
    }
    eprintln!();

    options.format.write(&measurements);
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_one(
    scenario: &Scenario,
    traversal: Traversal,
    size: usize,
    options: &Options,
    sys: &mut System,
) -> Measurement {
    let (a, b) = (scenario.inputs)(size);
    let engine = AlignmentEngineBuilder::new(&*scenario.model)
        .traversal(traversal)
        .build();

    let before = rss_kib(sys);
    let start = Instant::now();
    let result = engine.distance(&a, &b);
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let (distance, status, detail) = match result {
        Err(err) => (None, VerificationStatus::Failed, Some(err.to_string())),
        Ok(distance) => {
            let expected = match scenario.closed_form {
                Some(f) => Some(f(size)),
                None if size <= options.verify_limit => {
                    Some(reference_distance(&a, &b, &*scenario.model))
                }
                None => None,
            };
            match expected {
                None => (Some(distance), VerificationStatus::NotChecked, None),
                Some(e) if e == distance => (Some(distance), VerificationStatus::Passed, None),
                Some(e) => (
                    Some(distance),
                    VerificationStatus::Failed,
                    Some(format!("expected {e}, got {distance}")),
                ),
            }
        }
    };

    Measurement {
        scenario: scenario.name,
        traversal,
        size,
        distance,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

/// Row-by-row fill of a nested table, independent of the engine.
fn reference_distance(a: &[u8], b: &[u8], model: &dyn CostModel) -> Distance {
    let cost = |c: i64| c as Distance;
    let (n, m) = (a.len(), b.len());
    let mut dp = vec![vec![0 as Distance; m + 1]; n + 1];
    for i in 1..=n {
        dp[i][0] = dp[i - 1][0] + cost(model.insertion_cost(a[i - 1]));
    }
    for j in 1..=m {
        dp[0][j] = dp[0][j - 1] + cost(model.insertion_cost(b[j - 1]));
    }
    for i in 1..=n {
        for j in 1..=m {
            let diag = dp[i - 1][j - 1] + cost(model.substitution_cost(a[i - 1], b[j - 1]));
            let left = dp[i][j - 1] + cost(model.insertion_cost(b[j - 1]));
            let up = dp[i - 1][j] + cost(model.insertion_cost(a[i - 1]));
            dp[i][j] = diag.min(left).min(up);
        }
    }
    dp[n][m]
}

fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * i / 3 + offset) % ALPHABET.len()])
        .collect()
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

fn csv_detail(m: &Measurement) -> String {
    m.verification_detail
        .as_deref()
        .map(|s| s.replace('"', "'"))
        .unwrap_or_default()
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,traversal,size,distance,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.traversal,
            m.size,
            m.distance.map(|d| d.to_string()).unwrap_or_default(),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            csv_detail(m)
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    println!(
        "{:<col1$}  {:<10}  {:>6}  {:>9}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "traversal", "size", "distance", "wall_s", "rss_delta_kib", "status",
    );
    println!("{}", "-".repeat(col1 + 90));
    for m in measurements {
        println!(
            "{:<col1$}  {:<10}  {:>6}  {:>9}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.traversal.as_str(),
            m.size,
            m.distance.map(|d| d.to_string()).unwrap_or_default(),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
}

fn write_json(measurements: &[Measurement]) {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        println!(
            "  {{\"scenario\":\"{}\",\"traversal\":\"{}\",\"size\":{},\"distance\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.traversal,
            m.size,
            m.distance.map_or_else(|| "null".to_string(), |d| d.to_string()),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match m.verification_detail {
                Some(ref d) => format!("\"{}\"", d.replace('"', "'")),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
}
