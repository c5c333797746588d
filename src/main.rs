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

use std::process;

mod cmd;
mod flags;

// Exit codes: 0 = compared, no problems. 1 = compared, problems found.
// 2 = the comparison could not run at all. CI jobs key off the distinction.
fn main() {
    let flags = flags::ApiCompare::from_env_or_exit();

    let outcome = run(flags);

    for diagnostic in &outcome.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let has_fatal = outcome.diagnostics.iter().any(|d| d.is_fatal());
    if has_fatal {
        process::exit(2);
    }
    if outcome.problems_found > 0 {
        process::exit(1);
    }
}

fn run(flags: flags::ApiCompare) -> cmd::Outcome {
    match flags.subcommand {
        flags::ApiCompareCmd::Compare(compare_flags) => cmd::compare::run(&compare_flags),
        flags::ApiCompareCmd::Info(info_flags) => cmd::info::run(&info_flags),
    }
}
