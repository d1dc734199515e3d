#![no_main]

use libfuzzer_sys::fuzz_target;
use zest::{Fingerprint, SymmetricSecret};

fuzz_target!(|data: &str| {
    if let Ok(id) = Fingerprint::try_from(data) {
        assert!(id.to_string().eq_ignore_ascii_case(data));
    }
    let _ = SymmetricSecret::try_from(data);
});
