use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use satbench::batch;
use satbench::config::BenchConfig;
use satbench::display;

#[derive(Parser)]
#[command(
    name = "satbench",
    version,
    about = "Benchmark a SAT solver against a directory of CNF instances"
)]
struct Cli {
    /// TOML config file (defaults to ./satbench.toml, then the user config dir)
    config: Option<PathBuf>,

    /// Print the per-instance outcome report as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = BenchConfig::load(cli.config.as_deref())?;

    println!(
        "Benchmarking {} on {} (timeout {:.0}s)",
        config.solver.display(),
        config.instance_dir.display(),
        config.timeout.as_secs_f64()
    );

    let report = batch::run(&config).await?;

    if cli.json {
        println!("{}", display::format_json(&report.records));
    } else {
        println!("{}", display::format_summary(&report.records));
        println!(
            "Wrote {} measurements to {}",
            report.durations.len(),
            config.results_path.display()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", err);
        process::exit(1);
    }
}
