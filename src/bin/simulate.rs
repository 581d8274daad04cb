//! Duel balance simulator CLI.
//!
//! Runs Monte Carlo simulations of every archetype matchup.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 battles per matchup
//!   cargo run --bin simulate -- -n 100          # 100 battles per matchup
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use duel::simulator::{run_simulation, SimConfig};
use duel::Archetype;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

struct SimArgs {
    config: SimConfig,
    verbose: bool,
    json: bool,
}

enum Command {
    Simulate(SimArgs),
    Help,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let SimArgs {
        config,
        verbose,
        json,
    } = match parse_args(&args) {
        Ok(Command::Simulate(sim_args)) => sim_args,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                DUEL BALANCE SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs/Matchup:   {}", config.num_runs);
    println!("  Matchups:       {}", config.matchups.len());
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Simulation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let written = report
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|body| std::fs::write(&filename, body).map_err(|e| e.to_string()));
        match written {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => {
                eprintln!("Failed to write JSON report: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config = SimConfig::default();
    let mut verbose = false;
    let mut json = false;
    let mut matchups = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                let value = take_value(args, &mut i)?;
                config.num_runs = value
                    .parse()
                    .map_err(|_| format!("Invalid run count: {}", value))?;
            }
            "-s" | "--seed" => {
                let value = take_value(args, &mut i)?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid seed: {}", value))?,
                );
            }
            "-m" | "--matchup" => {
                // e.g. --matchup Heavy:Precise, repeatable
                let value = take_value(args, &mut i)?;
                matchups.push(parse_matchup(value)?);
            }
            "--quick" => config.num_runs = SimConfig::quick().num_runs,
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    if !matchups.is_empty() {
        config.matchups = matchups;
    }

    Ok(Command::Simulate(SimArgs {
        config,
        verbose,
        json,
    }))
}

fn take_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn parse_matchup(value: &str) -> Result<(Archetype, Archetype), String> {
    let (first, second) = value
        .split_once(':')
        .ok_or_else(|| format!("Invalid matchup `{}` (expected FIRST:SECOND)", value))?;
    let first = first.parse::<Archetype>().map_err(|e| e.to_string())?;
    let second = second.parse::<Archetype>().map_err(|e| e.to_string())?;
    Ok((first, second))
}

fn print_help() {
    println!("Duel Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Battles per matchup (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -m, --matchup <A:B>   Only simulate A (first) vs B, repeatable");
    println!("    --quick               100 battles per matchup");
    println!("    --json                Save JSON report to file");
    println!("    -v, --verbose         Log each matchup as it finishes");
    println!("    -h, --help            Show this help message");
}
