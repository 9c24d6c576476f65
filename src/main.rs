// SPDX-License-Identifier: CC0-1.0

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use itertools::Itertools;
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io::{self, Read};

use shamir_reconstruct::{ShareData, decode_in_base, reconstruct};

#[derive(Parser)]
#[clap(name = "shamir-reconstruct")]
#[clap(version = "0.1.0")]
#[clap(about = "CLI tool to recover a Shamir secret from base-encoded shares.", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstructs the secret from one or more JSON share files
    Reconstruct(ReconstructArgs),
    /// Decodes a digit string written in the given base
    Decode(DecodeArgs),
    /// Lists the decoded points of a JSON share file
    Points(PointsArgs),
}

#[derive(Args)]
struct ReconstructArgs {
    /// JSON share files, or "-" to read from stdin
    #[clap(required = true)]
    files: Vec<String>,
}

#[derive(Args)]
struct DecodeArgs {
    /// Digit string to decode
    value: String,
    /// Base the digits are written in (2 to 36)
    #[clap(short, long, default_value_t = 10)]
    base: u32,
}

#[derive(Args)]
struct PointsArgs {
    /// JSON share file, or "-" to read from stdin
    file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose)?;

    match cli.command {
        Commands::Reconstruct(args) => handle_reconstruct(args),
        Commands::Decode(args) => handle_decode(args),
        Commands::Points(args) => handle_points(args),
    }
}

fn init_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")
}

fn load_shares(path: &str) -> Result<ShareData> {
    let json = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read share data from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    ShareData::from_json(&json).with_context(|| format!("Failed to parse {}", path))
}

fn handle_reconstruct(args: ReconstructArgs) -> Result<()> {
    let total = args.files.len();
    let mut failed = 0;

    for path in &args.files {
        let result = load_shares(path)
            .and_then(|data| reconstruct(&data).context("Reconstruction failed"));

        match result {
            Ok(secret) => {
                info!("Reconstructed {}", path);
                println!("{}: {}", path, secret);
            }
            Err(err) => {
                error!("{}: {:#}", path, err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} input(s) failed", failed, total);
    }

    Ok(())
}

fn handle_decode(args: DecodeArgs) -> Result<()> {
    let value = decode_in_base(&args.value, args.base)
        .with_context(|| format!("Failed to decode {:?} in base {}", args.value, args.base))?;

    println!("{}", value);

    Ok(())
}

fn handle_points(args: PointsArgs) -> Result<()> {
    let data = load_shares(&args.file)?;
    let points = data.points().context("Failed to decode shares")?;

    let k = data.config.k;
    for (i, point) in points
        .iter()
        .sorted_by(|a, b| a.x.cmp(&b.x))
        .enumerate()
    {
        let marker = if i < k { "*" } else { " " };
        println!("{} ({}, {})", marker, point.x, point.y);
    }

    if points.len() < k {
        println!(
            "Threshold is {} but only {} share(s) are present.",
            k,
            points.len()
        );
    }

    Ok(())
}
