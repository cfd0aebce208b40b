use aesfold::{hash, hash_with_backend, kernels, Backend};
use bolero::check;

#[test]
fn fuzz_backend_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // REFERENCE
        // =============================================================================

        // Logic: the portable kernel needs no CPU features and is the ground truth.
        let reference = kernels::portable::oneshot(data);

        // =============================================================================
        // VERIFICATION
        // =============================================================================

        assert_eq!(hash(data), reference, "Dispatched hash mismatch");

        for backend in Backend::ALL {
            if let Ok(h) = hash_with_backend(data, backend) {
                assert_eq!(h, reference, "{backend} mismatch vs Portable");
            }
        }
    });
}
