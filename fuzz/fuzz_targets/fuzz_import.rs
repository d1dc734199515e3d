#![no_main]

use libfuzzer_sys::fuzz_target;
use zest::EncryptionKey;

fuzz_target!(|data: &str| {
    // Arbitrary blobs must be rejected, never panic
    let _ = EncryptionKey::from_export(data);
});
