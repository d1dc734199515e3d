#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use zest::EncryptionKey;

static KEY: OnceLock<EncryptionKey> = OnceLock::new();

fuzz_target!(|data: &str| {
    let key = KEY.get_or_init(|| EncryptionKey::generate(1024).expect("key generation"));
    let _ = key.decrypt(data);
    let _ = key.verify(data, data);
});
