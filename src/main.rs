// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: print S(n, k) and every partition of `1..=n`
//! into `k` blocks, one per line, in minimal-change order.

use clap::Parser;
use colored::Colorize;
use set_partitions::{generate, stirling};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "partitions",
    about = "Enumerate the partitions of {1, ..., N} into K non-empty blocks"
)]
struct Args {
    /// Number of elements (N >= 1).
    n: usize,

    /// Number of blocks (1 <= K <= N).
    k: usize,

    /// Print only the count S(N, K), not the partitions themselves.
    #[arg(long)]
    count_only: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let count = match stirling::count(args.n, args.k) {
        Ok(count) => count,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} S({}, {}) = {}",
        "=>".green().bold(),
        args.n,
        args.k,
        count
    );

    if !args.count_only {
        let elements: Vec<usize> = (1..=args.n).collect();
        // Domain already validated by the count above.
        match generate(elements, args.k) {
            Ok(partitions) => {
                for partition in partitions {
                    println!("{}", partition);
                }
            }
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
