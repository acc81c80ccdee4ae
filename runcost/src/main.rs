//! Reads `m n` and an `m x n` cost grid from stdin, prints the minimum
//! run-charged corner-to-corner path cost.
//!
//! Run: echo "2 2 1 2 2 1" | cargo run --bin runcost

use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = runcost_lib::run(io::stdin().lock(), io::stdout().lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
