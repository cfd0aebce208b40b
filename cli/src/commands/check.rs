//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::hash::hash_file;
use aesfold::Backend;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

// =============================================================================
// PARSING
// =============================================================================

/// Parse a 16-digit hex checksum as written by `aesfold FILE`.
fn parse_hash(text: &str) -> Option<u64> {
    let mut bytes = [0u8; 8];
    hex::decode_to_slice(text, &mut bytes).ok()?;
    Some(u64::from_be_bytes(bytes))
}

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
///
/// Returns `Ok(false)` if any entry failed to match or could not be read.
pub fn check_mode(checksum_file: &PathBuf, backend: Backend) -> Result<bool> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected, file_path)) = line.split_once("  ") else {
            log::warn!("Invalid format: {line}");
            continue;
        };
        let Some(expected) = parse_hash(expected.trim()) else {
            log::warn!("Invalid checksum: {line}");
            continue;
        };

        let file_path = PathBuf::from(file_path.trim());
        total += 1;

        match hash_file(&file_path, backend) {
            Ok(actual) if actual == expected => println!("{}: OK", file_path.display()),
            Ok(_) => {
                println!("{}: FAILED", file_path.display());
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({:#})", file_path.display(), e);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
    }

    Ok(failed == 0)
}
