//! Terminal driver for a single duel.
//!
//! Usage:
//!   duel [OPTIONS]
//!
//! Examples:
//!   duel --p1-name Ann --p1 Heavy --p2-name Bea --p2 Precise
//!   duel --seed 42 --delay-ms 0          # Reproducible, no pacing
//!   duel --seed 42 --json                # Full result as JSON

use duel::battle::{health_label, Battle, BattleEvent};
use duel::core::DEFAULT_TURN_DELAY_MS;
use duel::{build_info, create_combatant, Side};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct DuelOptions {
    p1_name: String,
    p1_archetype: String,
    p2_name: String,
    p2_archetype: String,
    seed: Option<u64>,
    delay_ms: u64,
    json: bool,
    verbose: bool,
}

impl Default for DuelOptions {
    fn default() -> Self {
        Self {
            p1_name: "Player 1".to_string(),
            p1_archetype: "Precise".to_string(),
            p2_name: "Player 2".to_string(),
            p2_archetype: "Heavy".to_string(),
            seed: None,
            delay_ms: DEFAULT_TURN_DELAY_MS,
            json: false,
            verbose: false,
        }
    }
}

enum Command {
    Fight(DuelOptions),
    Help,
    Version,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Ok(Command::Fight(options)) => options,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'duel --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(options.verbose);

    match run_duel(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run_duel(options: &DuelOptions) -> Result<(), Box<dyn Error>> {
    let first = create_combatant(&options.p1_archetype, &options.p1_name)?;
    let second = create_combatant(&options.p2_archetype, &options.p2_name)?;
    let rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut battle = Battle::new(first, second, rng)?;

    if options.json {
        while battle.advance_one_turn().is_some() {}
        if let Some(result) = battle.into_result() {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        return Ok(());
    }

    print_health(&battle);
    let delay = Duration::from_millis(options.delay_ms);
    while let Some(event) = battle.advance_one_turn() {
        match event {
            BattleEvent::Attack(_) => {
                println!("{}", event);
                print_health(&battle);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            BattleEvent::Finished { .. } => {
                println!();
                println!("{}", event);
            }
        }
    }

    Ok(())
}

fn print_health(battle: &Battle<ChaCha8Rng>) {
    for side in [Side::First, Side::Second] {
        let combatant = battle.combatant(side);
        println!("  {:<32} {}", combatant.name(), health_label(combatant));
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = DuelOptions::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--p1-name" => options.p1_name = take_value(args, &mut i)?.to_string(),
            "--p1" => options.p1_archetype = take_value(args, &mut i)?.to_string(),
            "--p2-name" => options.p2_name = take_value(args, &mut i)?.to_string(),
            "--p2" => options.p2_archetype = take_value(args, &mut i)?.to_string(),
            "-s" | "--seed" => {
                let value = take_value(args, &mut i)?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid seed: {}", value))?,
                );
            }
            "--delay-ms" => {
                let value = take_value(args, &mut i)?;
                options.delay_ms = value
                    .parse()
                    .map_err(|_| format!("Invalid delay: {}", value))?;
            }
            "--json" => options.json = true,
            "-v" | "--verbose" => options.verbose = true,
            "--version" => return Ok(Command::Version),
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Command::Fight(options))
}

fn take_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn print_help() {
    println!("Duel - Turn-Based Battle Simulator");
    println!();
    println!("USAGE:");
    println!("    duel [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --p1-name <NAME>    Player 1 display name (default: Player 1)");
    println!("    --p1 <ARCHETYPE>    Player 1 archetype (default: Precise)");
    println!("    --p2-name <NAME>    Player 2 display name (default: Player 2)");
    println!("    --p2 <ARCHETYPE>    Player 2 archetype (default: Heavy)");
    println!("    -s, --seed <S>      Random seed for a reproducible battle");
    println!(
        "    --delay-ms <MS>     Pause between turns (default: {})",
        DEFAULT_TURN_DELAY_MS
    );
    println!("    --json              Print the full result as JSON");
    println!("    -v, --verbose       Log every turn to stderr");
    println!("    --version           Show version information");
    println!("    -h, --help          Show this help message");
    println!();
    println!("ARCHETYPES:");
    for archetype in duel::Archetype::ALL {
        let (min, max) = archetype.damage_range();
        println!(
            "    {:<9} {:<17} {:>3} HP, {}-{} damage",
            archetype.name(),
            archetype.roster_label(),
            archetype.default_max_health(),
            min,
            max
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("duel")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let Ok(Command::Fight(options)) = parse_args(&args(&[])) else {
            panic!("expected a fight");
        };
        assert_eq!(options.p1_archetype, "Precise");
        assert_eq!(options.delay_ms, DEFAULT_TURN_DELAY_MS);
        assert!(options.seed.is_none());
    }

    #[test]
    fn test_parse_full() {
        let parsed = parse_args(&args(&[
            "--p1-name", "Ann", "--p1", "Heavy", "--p2", "Agile", "--seed", "42", "--delay-ms",
            "0", "--json",
        ]));
        let Ok(Command::Fight(options)) = parsed else {
            panic!("expected a fight");
        };
        assert_eq!(options.p1_name, "Ann");
        assert_eq!(options.p1_archetype, "Heavy");
        assert_eq!(options.p2_archetype, "Agile");
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.delay_ms, 0);
        assert!(options.json);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_parse_help_and_version() {
        assert!(matches!(parse_args(&args(&["-h"])), Ok(Command::Help)));
        assert!(matches!(
            parse_args(&args(&["--version"])),
            Ok(Command::Version)
        ));
    }
}
