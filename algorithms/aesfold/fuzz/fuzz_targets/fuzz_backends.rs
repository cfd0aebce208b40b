#![no_main]

use aesfold::{hash, hash_with_backend, kernels, Backend};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // 1. BACKEND AGREEMENT
    // =============================================================================

    let reference = kernels::portable::oneshot(data);
    assert_eq!(hash(data), reference, "Dispatched hash mismatch");

    for backend in Backend::ALL {
        if let Ok(h) = hash_with_backend(data, backend) {
            assert_eq!(h, reference, "{backend} mismatch vs Portable");
        }
    }

    // =============================================================================
    // 2. UNROLL BOUNDARY
    // =============================================================================

    // Both sides of the 128-byte threshold must stay consistent across backends
    if data.len() > 128 {
        let (head, _) = data.split_at(128);
        assert_eq!(hash(head), kernels::portable::oneshot(head));
    }
});
