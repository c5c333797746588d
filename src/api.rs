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

//! Data model for published API descriptions.
//!
//! An API description file is a JSON document whose top-level `phetioElements`
//! key maps element identifiers to flat metadata records. The field names here
//! are the historical ones from the publishing pipeline, so existing API files
//! load unchanged. Anything else in the document (version info, type
//! registries) is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};

/// Metadata record for one published element.
///
/// Every attribute is optional; an absent attribute and an attribute that was
/// never written mean the same thing to the comparator. Unknown JSON fields
/// are ignored on ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dynamic_element: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archetype: Option<bool>,
    // Historical spelling with a capitalized ID suffix, which camelCase
    // renaming would mangle.
    #[serde(rename = "archetypePhetioID", skip_serializing_if = "Option::is_none")]
    pub archetype_phetio_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_frequency: Option<bool>,
}

/// One version of a published API: element identifiers and their metadata, in
/// document order.
///
/// Document order matters because problem reports follow the iteration order
/// of the first description, and reordering a report between runs makes CI
/// diffs noisy. serde_json is built with `preserve_order` so the order
/// survives parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiDescription {
    elements: Vec<(String, ElementMetadata)>,
}

impl ApiDescription {
    /// Builds a description from an already-parsed JSON document.
    ///
    /// This is the input contract boundary: a document without a
    /// `phetioElements` object is rejected, never treated as zero elements.
    pub fn from_value(value: &Value) -> Result<ApiDescription, Diagnostic> {
        let elements_value = match value.get("phetioElements") {
            Some(v) => v,
            None => {
                return Err(Diagnostic::new(
                    DiagnosticLevel::Fatal,
                    DiagnosticCode::MissingElementsMap,
                    "I couldn't find a \"phetioElements\" object in this API description."
                        .to_string(),
                )
                .with_advice(
                    "An API description must have a top-level \"phetioElements\" key \
                     mapping element identifiers to their metadata records. If this file \
                     came from the publishing pipeline, it may be truncated or be a \
                     different kind of JSON file altogether."
                        .to_string(),
                ));
            }
        };

        let map = match elements_value.as_object() {
            Some(map) => map,
            None => {
                return Err(Diagnostic::new(
                    DiagnosticLevel::Fatal,
                    DiagnosticCode::WrongElementsType,
                    format!(
                        "I expected \"phetioElements\" to be an object mapping element \
                         identifiers to metadata records, but found {}.",
                        value_kind(elements_value)
                    ),
                ));
            }
        };

        let mut elements: Vec<(String, ElementMetadata)> = Vec::with_capacity(map.len());
        for (identifier, metadata_value) in map {
            let metadata = match ElementMetadata::deserialize(metadata_value) {
                Ok(m) => m,
                Err(e) => {
                    return Err(Diagnostic::new(
                        DiagnosticLevel::Fatal,
                        DiagnosticCode::InvalidElementMetadata,
                        format!(
                            "I couldn't read the metadata record for element \"{}\": {}",
                            identifier, e
                        ),
                    )
                    .with_advice(
                        "Each value under \"phetioElements\" must be an object whose \
                         attributes are strings or booleans, for example:\n\
                         {\"typeName\": \"PropertyIO\", \"state\": true}"
                            .to_string(),
                    ));
                }
            };
            elements.push((identifier.clone(), metadata));
        }

        Ok(ApiDescription { elements })
    }

    /// Element identifiers and metadata in document order.
    pub fn elements(&self) -> &[(String, ElementMetadata)] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_recognized_attributes() {
        let doc = json!({
            "version": {"major": 1, "minor": 0},
            "phetioElements": {
                "sim.global.model": {
                    "typeName": "PropertyIO",
                    "eventType": "MODEL",
                    "state": true,
                    "readOnly": false,
                    "archetypePhetioID": "sim.general.archetype",
                    "unrecognizedAttribute": 42
                }
            }
        });

        let api = ApiDescription::from_value(&doc).unwrap();
        assert_eq!(api.len(), 1);

        let (identifier, metadata) = &api.elements()[0];
        assert_eq!(identifier, "sim.global.model");
        assert_eq!(metadata.type_name.as_deref(), Some("PropertyIO"));
        assert_eq!(metadata.event_type.as_deref(), Some("MODEL"));
        assert_eq!(metadata.state, Some(true));
        assert_eq!(metadata.read_only, Some(false));
        assert_eq!(
            metadata.archetype_phetio_id.as_deref(),
            Some("sim.general.archetype")
        );
        assert_eq!(metadata.featured, None);
    }

    #[test]
    fn test_from_value_preserves_document_order() {
        let doc = json!({
            "phetioElements": {
                "sim.z": {},
                "sim.a": {},
                "sim.m": {}
            }
        });

        let api = ApiDescription::from_value(&doc).unwrap();
        let identifiers: Vec<&str> = api.elements().iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(identifiers, vec!["sim.z", "sim.a", "sim.m"]);
    }

    #[test]
    fn test_from_value_rejects_missing_elements_map() {
        let doc = json!({"version": 2});

        let err = ApiDescription::from_value(&doc).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::MissingElementsMap);
        assert!(err.is_fatal());
    }

    #[test]
    fn test_from_value_rejects_non_object_elements() {
        let doc = json!({"phetioElements": ["sim.x", "sim.y"]});

        let err = ApiDescription::from_value(&doc).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::WrongElementsType);
        assert!(err.description.contains("an array"));
    }

    #[test]
    fn test_from_value_rejects_bad_metadata_type() {
        let doc = json!({
            "phetioElements": {
                "sim.x": {"state": "not-a-boolean"}
            }
        });

        let err = ApiDescription::from_value(&doc).unwrap_err();
        assert_eq!(err.code, DiagnosticCode::InvalidElementMetadata);
        assert!(err.description.contains("sim.x"));
    }

    #[test]
    fn test_metadata_serializes_with_historical_field_names() {
        let metadata = ElementMetadata {
            type_name: Some("ActionIO".to_string()),
            read_only: Some(true),
            archetype_phetio_id: Some("sim.archetype".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            value,
            json!({
                "typeName": "ActionIO",
                "readOnly": true,
                "archetypePhetioID": "sim.archetype"
            })
        );
    }
}
