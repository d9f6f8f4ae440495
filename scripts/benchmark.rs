// scripts/benchmark.rs
use bsm_calc::batch::{greeks_batch, price_batch, price_batch_serial};
use bsm_calc::math_utils::Timer;
use bsm_calc::sampling::ParameterSampler;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Command::new("rustc")
                .arg("--version")
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown Rust version".to_string()),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    options: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    failures: usize,
}

impl BenchmarkResult {
    fn new(name: String, options: usize, time_ms: f64, failures: usize) -> Self {
        Self {
            name,
            options,
            time_ms,
            throughput_per_sec: options as f64 / (time_ms / 1000.0),
            failures,
        }
    }
}

fn run_batch_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let sizes = [10_000, 100_000, 1_000_000];

    for &n in &sizes {
        println!("Running benchmarks with {} option sets...", n);
        let params = ParameterSampler::new(42).sample_n(n);
        let mut timer = Timer::new();

        timer.start();
        let serial = price_batch_serial(&params);
        let serial_ms = timer.elapsed_ms();
        results.push(BenchmarkResult::new(
            format!("Price pair, serial ({}k)", n / 1000),
            n,
            serial_ms,
            serial.iter().filter(|r| r.is_err()).count(),
        ));

        timer.start();
        let parallel = price_batch(&params);
        let parallel_ms = timer.elapsed_ms();
        results.push(BenchmarkResult::new(
            format!("Price pair, rayon ({}k)", n / 1000),
            n,
            parallel_ms,
            parallel.iter().filter(|r| r.is_err()).count(),
        ));

        if serial != parallel {
            eprintln!("WARNING!: serial and parallel batches disagree for n = {}", n);
        }

        timer.start();
        let greeks = greeks_batch(&params);
        let greeks_ms = timer.elapsed_ms();
        results.push(BenchmarkResult::new(
            format!("Prices + Greeks, rayon ({}k)", n / 1000),
            n,
            greeks_ms,
            greeks.iter().filter(|r| r.is_err()).count(),
        ));
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;
    writeln!(file, "Benchmark,Options,Time_ms,Throughput_per_sec,Failures")?;

    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{}",
            result.name, result.options, result.time_ms, result.throughput_per_sec, result.failures
        )?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("bsm-calc Batch Pricing Benchmark");
    println!("================================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_batch_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<35} {:>10} {:>12} {:>15} {:>8}",
        "Benchmark", "Options", "Time (ms)", "Throughput/s", "Failed"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<35} {:>10} {:>12.2} {:>15.0} {:>8}",
            result.name, result.options, result.time_ms, result.throughput_per_sec, result.failures
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("Could not write {}: {}", filename, e),
    }
}
