// Proptest configuration for integration tests.
//
// PROPTEST_CASES sets the case count (default 16; engine properties spin up
// a runtime per case). Inputs are generated valid by construction, so no
// property relies on prop_assume!.

use proptest::prelude::ProptestConfig;

pub fn proptest_prelude_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(16)
        .max(1);

    ProptestConfig {
        // Regression files are not kept for integration binaries
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}
