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

use api_compare::{load_api, Diagnostic, DiagnosticCode, DiagnosticLevel, ElementMetadata};
use serde::Serialize;

use crate::cmd::Outcome;
use crate::flags;

#[derive(Serialize)]
struct JsonElement<'a> {
    identifier: &'a str,
    #[serde(flatten)]
    metadata: &'a ElementMetadata,
}

#[derive(Serialize)]
struct JsonInfoOutput<'a> {
    file: String,
    element_count: usize,
    elements: Vec<JsonElement<'a>>,
}

pub fn run(flags: &flags::Info) -> Outcome {
    let api = match load_api(&flags.file) {
        Ok(api) => api,
        Err(diagnostics) => return Outcome::failed(diagnostics),
    };

    let is_json_output = flags.output.as_ref().map(|s| s == "json").unwrap_or(false);

    if is_json_output {
        let json_elements: Vec<JsonElement> = api
            .elements()
            .iter()
            .map(|(identifier, metadata)| JsonElement {
                identifier,
                metadata,
            })
            .collect();

        let json_output = JsonInfoOutput {
            file: flags.file.display().to_string(),
            element_count: api.len(),
            elements: json_elements,
        };

        match serde_json::to_string_pretty(&json_output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                return Outcome::failed(vec![Diagnostic::new(
                    DiagnosticLevel::Fatal,
                    DiagnosticCode::InvalidJson,
                    format!("I couldn't serialize the summary to JSON: {}", e),
                )]);
            }
        }

        return Outcome::ok();
    }

    // Human-readable output mode
    println!("API description: {}", flags.file.display());

    if api.is_empty() {
        println!("No elements found");
        return Outcome::ok();
    }

    if api.len() == 1 {
        println!("1 element");
    } else {
        println!("{} elements", api.len());
    }
    println!();

    // Table header
    println!("  Identifier                                        Type                  State  ReadOnly");
    println!("──────────────────────────────────────────────────────────────────────────────────────────");

    for (identifier, metadata) in api.elements() {
        println!(
            "  {:<48}  {:<20}  {:<5}  {:<8}",
            truncate(identifier, 48),
            truncate(metadata.type_name.as_deref().unwrap_or("-"), 20),
            flag_display(metadata.state),
            flag_display(metadata.read_only),
        );
    }

    Outcome::ok()
}

fn flag_display(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}
