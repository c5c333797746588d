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

use chrono::Utc;
use serde::Serialize;

use crate::compare::Problem;

#[derive(Serialize)]
struct JsonReport<'a> {
    old: &'a str,
    new: &'a str,
    generated: String,
    problem_count: usize,
    problems: Vec<&'a str>,
}

/// Renders the problem list for terminal output: a count header followed by
/// the newline-joined messages. The message lines themselves are the stable
/// part of the contract; the header is presentation.
pub fn render_human(problems: &[Problem]) -> String {
    if problems.is_empty() {
        return "No problems found.".to_string();
    }

    let noun = if problems.len() == 1 {
        "problem"
    } else {
        "problems"
    };
    let messages: Vec<&str> = problems.iter().map(|p| p.message.as_str()).collect();

    format!(
        "Found {} {}:\n\n{}",
        problems.len(),
        noun,
        messages.join("\n")
    )
}

/// Renders the problem list as a JSON document for machine consumers, with
/// the input filenames and a generation timestamp for CI artifact trails.
pub fn render_json(old: &str, new: &str, problems: &[Problem]) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        old,
        new,
        generated: Utc::now().to_rfc3339(),
        problem_count: problems.len(),
        problems: problems.iter().map(|p| p.message.as_str()).collect(),
    };
    serde_json::to_string_pretty(&report)
}
