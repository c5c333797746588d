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

use api_compare::{
    compare, load_api, render_human, render_json, Diagnostic, DiagnosticCode, DiagnosticLevel,
};

use crate::cmd::Outcome;
use crate::flags;

pub fn run(flags: &flags::Compare) -> Outcome {
    let old_api = match load_api(&flags.old_api) {
        Ok(api) => api,
        Err(diagnostics) => return Outcome::failed(diagnostics),
    };

    let new_api = match load_api(&flags.new_api) {
        Ok(api) => api,
        Err(diagnostics) => return Outcome::failed(diagnostics),
    };

    let problems = compare(&old_api, &new_api);

    let is_json_output = flags.output.as_ref().map(|s| s == "json").unwrap_or(false);

    if is_json_output {
        let old_name = flags.old_api.display().to_string();
        let new_name = flags.new_api.display().to_string();
        match render_json(&old_name, &new_name, &problems) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                return Outcome::failed(vec![Diagnostic::new(
                    DiagnosticLevel::Fatal,
                    DiagnosticCode::InvalidJson,
                    format!("I couldn't serialize the report to JSON: {}", e),
                )]);
            }
        }
    } else {
        println!("{}", render_human(&problems));
    }

    Outcome::compared(problems.len())
}
