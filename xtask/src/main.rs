use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "digraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also run with the `tracing` feature to measure its overhead
        #[arg(long, default_value_t = false)]
        with_tracing: bool,
    },
}

const BENCH: &str = "graph_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            with_tracing,
        } => {
            if !report_only {
                run_benchmarks(quick, "default", &[])?;
                if with_tracing {
                    run_benchmarks(quick, "tracing", &["--features", "tracing"])?;
                }
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str, cargo_args: &[&str]) -> Result<()> {
    println!(">>> Benchmarking baseline: {baseline}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]).args(cargo_args);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to run bench for baseline {baseline}"))?;

    if !status.success() {
        anyhow::bail!("benchmark run for baseline {baseline} failed");
    }
    println!("Finished {baseline} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // workload -> baseline -> mean time in ns
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut report = String::from("# Graph Benchmark Report\n\n");
    report.push_str("| Workload | default (ns) | tracing (ns) | overhead |\n");
    report.push_str("|---|---|---|---|\n");

    for (workload, baselines) in &results {
        let base = baselines.get("default").copied();
        let traced = baselines.get("tracing").copied();
        let cell = |v: Option<f64>| v.map_or_else(|| "N/A".to_string(), |ns| format!("{ns:.0}"));
        let overhead = match (base, traced) {
            (Some(b), Some(t)) if b > 0.0 => format!("**{:.2}x**", t / b),
            _ => "-".to_string(),
        };
        report.push_str(&format!(
            "| {workload} | {} | {} | {overhead} |\n",
            cell(base),
            cell(traced)
        ));
    }

    fs::write(report_path, report)
        .with_context(|| format!("failed to write {}", report_path.display()))?;
    println!("Report written to {}", report_path.display());
    Ok(())
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../workload/baseline/estimates.json
        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let (Some(baseline), Some(workload)) = (file_name(baseline_dir), file_name(workload_dir)) else {
            continue;
        };
        if baseline == "report" || workload == "report" {
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("malformed estimates in {}", path.display()))?;

        if let Some(mean) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
        {
            results.entry(workload).or_default().insert(baseline, mean);
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}
