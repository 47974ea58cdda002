use revsim::{Scenario, ScenarioConfig, SnapshotPrinter};
use revsim::{bench_forces, bench_step};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under the scenarios/ directory
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Override the configured tick bound
    #[arg(long)]
    ticks: Option<u64>,

    /// Print a snapshot line per body every this many ticks
    #[arg(long, default_value_t = 100)]
    print_every: u64,

    /// Run the timing sweeps instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    let Scenario {
        mut parameters,
        mut system,
        forces,
    } = Scenario::build_scenario(scenario_cfg)?;

    if args.ticks.is_some() {
        parameters.max_ticks = args.ticks;
    }

    let mut printer = SnapshotPrinter { every: args.print_every };
    system.simulate(&forces, &parameters, &mut printer);

    Ok(())
}
