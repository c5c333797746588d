#![no_main]

use api_compare::load_api;
use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tempfile::NamedTempFile;

fuzz_target!(|data: &[u8]| {
    // Write the random bytes to a temporary file
    if let Ok(mut temp_file) = NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            // Loading should never panic, regardless of input.
            // It should either succeed or return diagnostics gracefully.
            let _ = load_api(temp_file.path());
        }
    }
});
