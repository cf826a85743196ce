use std::io::{self, BufWriter};
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use prng_cli::SampleArgs;

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = SampleArgs::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = prng_cli::run(args, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
