//! Economy simulator CLI.
//!
//! Run Monte Carlo simulations of whole sessions to check coin flow,
//! gacha collection pace and achievement unlock rates.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 -l 8     # 100 runs of an 8-level game
//!   cargo run --bin simulate -- --seed 42       # Reproducible run
//!   RUST_LOG=arcade_progress=debug cargo run --bin simulate -- -n 1

use arcade_progress::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ARCADE ECONOMY SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Levels:         {}", config.final_level);
    println!("  Secs / Level:   {}", config.seconds_per_level);
    println!("  Hit Rate:       {:.0}%", config.hit_rate * 100.0);
    println!("  Coins / Kill:   {}", config.coins_per_kill);
    println!("  Buy Upgrades:   {}", config.buy_upgrades);
    println!("  Roll Gacha:     {}", config.roll_gacha);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-l" | "--levels" => {
                if i + 1 < args.len() {
                    config.final_level = args[i + 1].parse().unwrap_or(config.final_level);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--hit-rate" => {
                if i + 1 < args.len() {
                    config.hit_rate = args[i + 1]
                        .parse::<f64>()
                        .ok()
                        .filter(|rate| rate.is_finite())
                        .unwrap_or(config.hit_rate);
                    i += 1;
                }
            }
            "--coins" => {
                if i + 1 < args.len() {
                    config.coins_per_kill = args[i + 1].parse().unwrap_or(config.coins_per_kill);
                    i += 1;
                }
            }
            "--no-shop" => {
                config.buy_upgrades = false;
            }
            "--no-gacha" => {
                config.roll_gacha = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--gacha-only" => {
                config = SimConfig::gacha_only();
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Arcade Economy Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated sessions (default: 1000)");
    println!("    -l, --levels <L>    Levels in the game (default: 5)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --hit-rate <P>      Chance a shot kills an enemy, 0.0-1.0 (default: 0.6)");
    println!("    --coins <C>         Coins per kill (default: 5)");
    println!("    --no-shop           Never buy upgrades");
    println!("    --no-gacha          Never roll the gacha");
    println!("    --quick             50 runs with seed 42");
    println!("    --gacha-only        Spend every coin on the gacha");
    println!("    --json              Also save the report as JSON");
    println!("    -v, --verbose       Log every run (needs RUST_LOG=info)");
    println!("    -h, --help          Show this help");
}
