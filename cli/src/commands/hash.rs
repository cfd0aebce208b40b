//! Hash Command
//!
//! File hashing, one file per Rayon task.

use aesfold::Backend;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// Hash a single file on `backend`.
pub fn hash_file(path: &PathBuf, backend: Backend) -> Result<u64> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to open: {}", path.display()))?;

    let start = Instant::now();
    let hash = aesfold::hash_with_backend(&data, backend)?;
    log::debug!(
        "{}: {} bytes in {:?}",
        path.display(),
        data.len(),
        start.elapsed()
    );
    Ok(hash)
}

/// Hash files in parallel; results come back in argument order.
pub fn hash_all(files: &[PathBuf], backend: Backend) -> Vec<Result<u64>> {
    // `collect` on an indexed parallel iterator keeps input order
    files
        .par_iter()
        .map(|file_path| hash_file(file_path, backend))
        .collect()
}

/// Hash files in parallel and print them in argument order.
pub fn hash_files(files: &[PathBuf], backend: Backend) -> Result<()> {
    let results = hash_all(files, backend);

    let mut failed = 0;
    for (file_path, result) in files.iter().zip(results) {
        match result {
            Ok(hash) => println!("{hash:016x}  {}", file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
