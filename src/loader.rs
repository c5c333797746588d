// api-compare is a tool for detecting breaking changes between API descriptions
// Copyright (C) 2025  Peoples Grocers LLC
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// To purchase a license under different terms contact admin@peoplesgrocers.com
// To request changes, report bugs, or give user feedback contact
// marxism@peoplesgrocers.com
//

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::api::ApiDescription;
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};

/// Reads and parses one API description file.
///
/// Every failure mode gets its own diagnostic instead of a bare error string:
/// the tool runs in CI where "the comparison could not run" output is the
/// only thing a person sees.
pub fn load_api<P: AsRef<Path>>(path: P) -> Result<ApiDescription, Vec<Diagnostic>> {
    let path = path.as_ref();
    let filename = path.display().to_string();

    if !path.exists() {
        return Err(vec![Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::PathNotFound,
            format!("I couldn't find the API description file: {}", filename),
        )
        .with_advice(
            "Make sure the file path is correct and the file exists. \
             Check for typos in the filename."
                .to_string(),
        )]);
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Err(vec![Diagnostic::new(
                DiagnosticLevel::Fatal,
                DiagnosticCode::PathNotFound,
                format!("I couldn't read the file {}: {}", filename, e),
            )
            .with_filename(filename)]);
        }
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => {
            return Err(vec![Diagnostic::new(
                DiagnosticLevel::Fatal,
                DiagnosticCode::InvalidUtf8,
                "I found invalid UTF-8 bytes in this file.".to_string(),
            )
            .with_filename(filename)
            .with_advice(
                "API description files must be UTF-8 encoded JSON. Make sure the file \
                 was saved with UTF-8 encoding, not Latin-1, Windows-1252, or another \
                 encoding."
                    .to_string(),
            )]);
        }
    };

    if text.trim().is_empty() {
        return Err(vec![Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::EmptyFile,
            "I found an empty file, but I need a JSON API description.".to_string(),
        )
        .with_filename(filename)
        .with_advice(
            "A valid API description is a JSON object with a top-level \
             \"phetioElements\" key mapping element identifiers to their metadata \
             records."
                .to_string(),
        )]);
    }

    let value = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(e) => {
            let line = e.line();
            let mut diagnostic = Diagnostic::new(
                DiagnosticLevel::Fatal,
                DiagnosticCode::InvalidJson,
                format!("I couldn't parse this file as JSON: {}", e),
            )
            .with_location(filename, line)
            .with_column(e.column())
            .with_advice(
                "Check for missing commas, quotes, or brackets. If the file was \
                 generated by the publishing pipeline, it may have been truncated \
                 by an interrupted build."
                    .to_string(),
            );
            if let Some(text_line) = text.lines().nth(line.saturating_sub(1)) {
                diagnostic = diagnostic.with_snippet(format!("{} | {}", line, text_line));
            }
            return Err(vec![diagnostic]);
        }
    };

    ApiDescription::from_value(&value).map_err(|diagnostic| vec![diagnostic.with_filename(filename)])
}
