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

//! Breaking-change detection between two API descriptions.
//!
//! The comparison is one-directional by policy: the old description is the
//! published contract, the new description is the candidate. Removing an
//! element breaks clients; adding one does not. Likewise `state` only breaks
//! when it becomes `false` (an element stops participating in state capture)
//! and `readOnly` only breaks when it becomes `true` (a writable element stops
//! being writable). Which attributes break and in which direction is encoded
//! in the `ATTRIBUTE_CHECKS` table rather than in per-attribute branches, so
//! extending the policy is one table row plus one test.
//!
//! `featured`, `studioControl`, and `highFrequency` are deliberately not in
//! the table. Changing them is non-breaking by policy and must never show up
//! in a report.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::api::{ApiDescription, ElementMetadata};

/// One detected incompatibility. Problems are data, not errors: a comparison
/// run always completes and returns every problem it found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub message: String,
}

impl Problem {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A primitive attribute value as it participates in comparison. Attributes
/// are flat by contract, so strict equality is value equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Str(String),
    Bool(bool),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Str(s) => write!(f, "{}", s),
            AttributeValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// When a changed attribute counts as breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BreakingRule {
    /// Any change in either direction breaks.
    AnyChange,
    /// Breaks only when the new value lands on this target. Movement away
    /// from the target, including from the target to something else, is fine.
    Becomes(AttributeValue),
}

struct AttributeCheck {
    name: &'static str,
    get: fn(&ElementMetadata) -> Option<AttributeValue>,
    rule: BreakingRule,
}

/// The comparison policy, checked per element in this order.
const ATTRIBUTE_CHECKS: &[AttributeCheck] = &[
    AttributeCheck {
        name: "typeName",
        get: |m| m.type_name.clone().map(AttributeValue::Str),
        rule: BreakingRule::AnyChange,
    },
    AttributeCheck {
        name: "eventType",
        get: |m| m.event_type.clone().map(AttributeValue::Str),
        rule: BreakingRule::AnyChange,
    },
    AttributeCheck {
        name: "playback",
        get: |m| m.playback.map(AttributeValue::Bool),
        rule: BreakingRule::AnyChange,
    },
    AttributeCheck {
        name: "isDynamicElement",
        get: |m| m.is_dynamic_element.map(AttributeValue::Bool),
        rule: BreakingRule::AnyChange,
    },
    AttributeCheck {
        name: "isArchetype",
        get: |m| m.is_archetype.map(AttributeValue::Bool),
        rule: BreakingRule::AnyChange,
    },
    AttributeCheck {
        name: "archetypePhetioID",
        get: |m| m.archetype_phetio_id.clone().map(AttributeValue::Str),
        rule: BreakingRule::AnyChange,
    },
    AttributeCheck {
        name: "state",
        get: |m| m.state.map(AttributeValue::Bool),
        rule: BreakingRule::Becomes(AttributeValue::Bool(false)),
    },
    AttributeCheck {
        name: "readOnly",
        get: |m| m.read_only.map(AttributeValue::Bool),
        rule: BreakingRule::Becomes(AttributeValue::Bool(true)),
    },
];

/// Compares two API descriptions and returns every breaking difference.
///
/// Pure and total: no I/O, neither input is mutated, and differences never
/// abort the run. Problems come out in check order: the removed-element check
/// first, then per-element attribute checks following the old description's
/// document order.
pub fn compare(old: &ApiDescription, new: &ApiDescription) -> Vec<Problem> {
    let mut problems = Vec::new();

    // Set comparison, not sequence comparison: two documents can list the same
    // identifiers in different order and still describe the same element set.
    let new_identifiers: HashSet<&str> = new
        .elements()
        .iter()
        .map(|(identifier, _)| identifier.as_str())
        .collect();

    let removed: Vec<&str> = old
        .elements()
        .iter()
        .map(|(identifier, _)| identifier.as_str())
        .filter(|identifier| !new_identifiers.contains(identifier))
        .collect();

    if !removed.is_empty() {
        problems.push(Problem::new(format!(
            "second API missing elements:\n{}",
            removed.join("\n")
        )));
    }

    let new_by_identifier: HashMap<&str, &ElementMetadata> = new
        .elements()
        .iter()
        .map(|(identifier, metadata)| (identifier.as_str(), metadata))
        .collect();

    for (identifier, old_metadata) in old.elements() {
        let new_metadata = match new_by_identifier.get(identifier.as_str()) {
            Some(metadata) => *metadata,
            None => continue,
        };

        for check in ATTRIBUTE_CHECKS {
            let old_value = (check.get)(old_metadata);
            let new_value = (check.get)(new_metadata);

            if old_value == new_value {
                continue;
            }

            let breaking = match &check.rule {
                BreakingRule::AnyChange => true,
                BreakingRule::Becomes(target) => new_value.as_ref() == Some(target),
            };

            if breaking {
                problems.push(Problem::new(format!(
                    "{}.{} changed from {} to {}",
                    identifier,
                    check.name,
                    render(old_value.as_ref()),
                    render(new_value.as_ref())
                )));
            }
        }
    }

    problems
}

// Absent attributes print as "undefined" to match the report text consumers
// of these reports already parse and grep for.
fn render(value: Option<&AttributeValue>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn api(doc: Value) -> ApiDescription {
        ApiDescription::from_value(&doc).unwrap()
    }

    #[test]
    fn test_identical_descriptions_have_no_problems() {
        let description = api(json!({
            "phetioElements": {
                "sim.screen.model": {"typeName": "PropertyIO", "state": true},
                "sim.screen.view": {"typeName": "NodeIO", "readOnly": false}
            }
        }));

        assert!(compare(&description, &description).is_empty());
    }

    #[test]
    fn test_removed_element_reported_once() {
        let old = api(json!({
            "phetioElements": {
                "sim.a": {},
                "sim.b": {}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.a": {}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].message, "second API missing elements:\nsim.b");
    }

    #[test]
    fn test_two_removed_elements_share_one_problem() {
        let old = api(json!({
            "phetioElements": {
                "sim.a": {},
                "sim.b": {},
                "sim.c": {}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.b": {}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].message,
            "second API missing elements:\nsim.a\nsim.c"
        );
    }

    #[test]
    fn test_added_element_is_silent() {
        let old = api(json!({
            "phetioElements": {
                "sim.a": {}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.a": {},
                "sim.b": {"typeName": "NodeIO", "readOnly": true}
            }
        }));

        assert!(compare(&old, &new).is_empty());
    }

    #[test]
    fn test_type_name_change_message() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "A"}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "B"}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].message, "sim.x.typeName changed from A to B");
    }

    #[test]
    fn test_attribute_appearing_renders_undefined() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "PropertyIO"}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].message,
            "sim.x.typeName changed from undefined to PropertyIO"
        );
    }

    #[test]
    fn test_state_becoming_false_is_breaking() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"state": true}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"state": false}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].message,
            "sim.x.state changed from true to false"
        );
    }

    #[test]
    fn test_state_becoming_true_is_not_breaking() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"state": false}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"state": true}
            }
        }));

        assert!(compare(&old, &new).is_empty());
    }

    #[test]
    fn test_state_undefined_to_false_is_breaking() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"state": false}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].message,
            "sim.x.state changed from undefined to false"
        );
    }

    #[test]
    fn test_read_only_becoming_true_is_breaking() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"readOnly": false}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"readOnly": true}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].message,
            "sim.x.readOnly changed from false to true"
        );
    }

    #[test]
    fn test_read_only_becoming_false_is_not_breaking() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"readOnly": true}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"readOnly": false}
            }
        }));

        assert!(compare(&old, &new).is_empty());
    }

    #[test]
    fn test_excluded_attributes_never_report() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"featured": true, "studioControl": true, "highFrequency": false}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"featured": false, "studioControl": false, "highFrequency": true}
            }
        }));

        assert!(compare(&old, &new).is_empty());
    }

    #[test]
    fn test_identifier_order_does_not_matter() {
        let old = api(json!({
            "phetioElements": {
                "sim.a": {"typeName": "T"},
                "sim.b": {"typeName": "U"}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.b": {"typeName": "U"},
                "sim.a": {"typeName": "T"}
            }
        }));

        assert!(compare(&old, &new).is_empty());
    }

    #[test]
    fn test_missing_elements_reported_before_attribute_changes() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "A"},
                "sim.gone": {}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "B"}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 2);
        assert_eq!(
            problems[0].message,
            "second API missing elements:\nsim.gone"
        );
        assert_eq!(problems[1].message, "sim.x.typeName changed from A to B");
    }

    #[test]
    fn test_multiple_attribute_changes_on_one_element() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "T1", "state": true}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "T2", "state": false}
            }
        }));

        let problems = compare(&old, &new);
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].message, "sim.x.typeName changed from T1 to T2");
        assert_eq!(
            problems[1].message,
            "sim.x.state changed from true to false"
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let old = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "T1"},
                "sim.y": {}
            }
        }));
        let new = api(json!({
            "phetioElements": {
                "sim.x": {"typeName": "T2"}
            }
        }));
        let old_before = old.clone();
        let new_before = new.clone();

        let _ = compare(&old, &new);

        assert_eq!(old, old_before);
        assert_eq!(new, new_before);
    }
}
