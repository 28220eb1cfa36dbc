//! Clawsseum job runner
//!
//! Reads one battle request as JSON, runs it through the chosen offering and
//! prints the job result.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, Metadata, Record};
use serde::Serialize;

use claw_core::{
    ArenaBattle, ArenaOptions, BattleRequest, GameRng, Offering, VipBattle, WagerBattle,
};

/// Clawsseum battle runner
#[derive(Parser, Debug)]
#[command(name = "clawsseum")]
#[command(author, version, about = "Clawsseum - Enter the arena!", long_about = None)]
struct Args {
    #[command(subcommand)]
    offering: OfferingKind,

    /// Request JSON file, `-` for stdin
    #[arg(short = 'r', long = "request", global = true, default_value = "-")]
    request: String,

    /// Seed for the battle RNG (random when omitted)
    #[arg(short = 's', long = "seed", global = true)]
    seed: Option<u64>,

    /// Arena options file
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Log battle progress to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Stop after validation and the payment message
    #[arg(long = "validate-only", global = true)]
    validate_only: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum OfferingKind {
    /// Standard battle against the champion
    Arena,
    /// Free battle for CLAWD holders
    Vip,
    /// Stake CLAWD, win 1.9x back
    Wager,
}

/// Minimal stderr logger
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // Only fails if a logger is already installed.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn read_request(source: &str) -> Result<BattleRequest> {
    let json = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading request from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("reading request file {source}"))?
    };
    BattleRequest::from_json(&json).context("parsing battle request")
}

fn load_options(path: Option<&PathBuf>) -> Result<ArenaOptions> {
    match path {
        Some(path) => ArenaOptions::load_from_file(path)
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(ArenaOptions::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Validate, announce, and (unless told otherwise) fight.
///
/// `announce` prints anything extra the offering needs the buyer to see
/// before the battle, such as a funds request.
fn run_job<O, F>(offering: &O, request: &BattleRequest, args: &Args, announce: F) -> Result<()>
where
    O: Offering,
    F: FnOnce(&O, &O::Entry) -> Result<()>,
{
    let entry = offering
        .validate(request)
        .with_context(|| format!("{} rejected the request", offering.name()))?;
    eprintln!("{}", offering.payment_message(&entry));
    announce(offering, &entry)?;

    if args.validate_only {
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::debug!("{} using seed {}", offering.name(), rng.seed());

    let job = offering.execute(&entry, &mut rng);
    print_json(&job)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = load_options(args.config.as_ref())?;
    let request = read_request(&args.request)?;

    match args.offering {
        OfferingKind::Arena => {
            run_job(&ArenaBattle::new(&options), &request, &args, |_, _| Ok(()))
        }
        OfferingKind::Vip => run_job(&VipBattle::new(&options), &request, &args, |_, _| Ok(())),
        OfferingKind::Wager => {
            run_job(&WagerBattle::new(&options), &request, &args, |wager, entry| {
                let funds = wager.funds_request(entry);
                eprintln!("{}", serde_json::to_string_pretty(&funds)?);
                Ok(())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args =
            Args::try_parse_from(["clawsseum", "wager", "--seed", "42", "--validate-only"]).unwrap();
        assert!(matches!(args.offering, OfferingKind::Wager));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.request, "-");
        assert!(args.validate_only);
        assert!(!args.verbose);
    }

    #[test]
    fn test_offering_required() {
        assert!(Args::try_parse_from(["clawsseum"]).is_err());
        assert!(Args::try_parse_from(["clawsseum", "duel"]).is_err());
    }

    #[test]
    fn test_default_options() {
        let options = load_options(None).unwrap();
        assert_eq!(options, ArenaOptions::default());
    }
}
