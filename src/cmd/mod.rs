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

use api_compare::Diagnostic;

pub mod compare;
pub mod info;

/// What a subcommand run produced. Diagnostics are "could not run" failures;
/// `problems_found` counts comparison findings, which are ordinary output.
pub struct Outcome {
    pub diagnostics: Vec<Diagnostic>,
    pub problems_found: usize,
}

impl Outcome {
    pub fn ok() -> Self {
        Self {
            diagnostics: Vec::new(),
            problems_found: 0,
        }
    }

    pub fn failed(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            problems_found: 0,
        }
    }

    pub fn compared(problems_found: usize) -> Self {
        Self {
            diagnostics: Vec::new(),
            problems_found,
        }
    }
}
