//! # `PractRand` Stream Generator
//!
//! Writes an endless stream of hash outputs for `PractRand` / dieharder.
//!
//! Each output is the aesfold hash of an incrementing 64-bit counter,
//! repeated to fill the input, written as 8 little-endian bytes.
//!
//! ```text
//! aesfold_stream --size 16 | RNG_test stdin64
//! ```

#![allow(clippy::cast_possible_truncation)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, ErrorKind, Write};

/// Input sizes visited by `--cyclic`: tail-only, one block, serial, 8-lane.
const CYCLE: [usize; 4] = [8, 16, 64, 128];

#[derive(Parser)]
#[command(name = "aesfold_stream")]
#[command(about = "Stream aesfold outputs of a counter to stdout", long_about = None)]
struct Args {
    /// Bytes hashed per output
    #[arg(short, long, default_value_t = 16)]
    size: usize,

    /// Rotate through 8, 16, 64 and 128-byte inputs instead of a fixed size
    #[arg(short, long)]
    cyclic: bool,

    /// Stop after this many outputs (default: run until stdout closes)
    #[arg(short = 'n', long)]
    count: Option<u64>,
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut input = Vec::new();
    let mut counter: u64 = 0;

    while args.count.is_none_or(|n| counter < n) {
        let size = if args.cyclic {
            CYCLE[(counter % CYCLE.len() as u64) as usize]
        } else {
            args.size
        };

        // Fill input with the counter (repeatedly if needed)
        let counter_bytes = counter.to_le_bytes();
        input.clear();
        input.extend((0..size).map(|i| counter_bytes[i % 8]));

        let hash = aesfold::hash(&input);

        match handle.write_all(&hash.to_le_bytes()) {
            Ok(()) => {}
            // The consumer hung up: normal termination for a stream
            Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e).context("Failed to write to stdout"),
        }

        counter = counter.wrapping_add(1);
    }

    handle.flush().context("Failed to flush stdout")
}
