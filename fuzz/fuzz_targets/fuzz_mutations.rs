#![no_main]

use api_compare::load_api;
use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tempfile::NamedTempFile;

fn mutate_document(data: &[u8]) -> Vec<u8> {
    // Start with a well-formed API description
    let base = r#"{"phetioElements":{"sim.screen.model":{"typeName":"PropertyIO","state":true},"sim.screen.view":{"typeName":"NodeIO","readOnly":false}}}"#;

    let mut result = base.as_bytes().to_vec();

    if data.is_empty() {
        return result;
    }

    // Keep mutations small and realistic
    let max_size = 4096; // 4KB limit

    for &byte in data.iter().take(16) {
        if result.len() > max_size {
            break;
        }

        match byte % 6 {
            0 => {
                // Truncate at random position
                let pos = (byte as usize) % result.len().max(1);
                result.truncate(pos);
            }
            1 => {
                // Insert invalid UTF-8
                let pos = (byte as usize) % (result.len() + 1);
                result.insert(pos, 0xFF);
            }
            2 => {
                // Corrupt a quote
                if let Some(pos) = result.iter().position(|&b| b == b'"') {
                    result[pos] = b'X';
                }
            }
            3 => {
                // Corrupt a brace
                if let Some(pos) = result.iter().position(|&b| b == b'{') {
                    result[pos] = b'?';
                }
            }
            4 => {
                // Insert random byte
                let pos = (byte as usize) % (result.len() + 1);
                result.insert(pos, byte);
            }
            _ => {
                // Corrupt a colon
                if let Some(pos) = result.iter().position(|&b| b == b':') {
                    result[pos] = b';';
                }
            }
        }
    }

    result
}

fuzz_target!(|data: &[u8]| {
    let mutated = mutate_document(data);

    if let Ok(mut temp_file) = NamedTempFile::new() {
        if temp_file.write_all(&mutated).is_ok() {
            // Loading a corrupted file should return diagnostics, never panic
            let _ = load_api(temp_file.path());
        }
    }
});
