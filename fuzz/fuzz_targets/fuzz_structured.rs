#![no_main]

use api_compare::{compare, ApiDescription};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::{json, Map, Value};

#[derive(Arbitrary, Debug)]
struct FuzzApi {
    elements: Vec<(String, FuzzMetadata)>,
}

#[derive(Arbitrary, Debug)]
struct FuzzMetadata {
    type_name: Option<String>,
    event_type: Option<String>,
    playback: Option<bool>,
    is_dynamic_element: Option<bool>,
    is_archetype: Option<bool>,
    archetype_phetio_id: Option<String>,
    state: Option<bool>,
    read_only: Option<bool>,
    featured: Option<bool>,
    studio_control: Option<bool>,
    high_frequency: Option<bool>,
}

fn to_document(api: &FuzzApi) -> Value {
    let mut elements = Map::new();
    for (identifier, metadata) in &api.elements {
        let mut record = Map::new();
        if let Some(v) = &metadata.type_name {
            record.insert("typeName".to_string(), json!(v));
        }
        if let Some(v) = &metadata.event_type {
            record.insert("eventType".to_string(), json!(v));
        }
        if let Some(v) = metadata.playback {
            record.insert("playback".to_string(), json!(v));
        }
        if let Some(v) = metadata.is_dynamic_element {
            record.insert("isDynamicElement".to_string(), json!(v));
        }
        if let Some(v) = metadata.is_archetype {
            record.insert("isArchetype".to_string(), json!(v));
        }
        if let Some(v) = &metadata.archetype_phetio_id {
            record.insert("archetypePhetioID".to_string(), json!(v));
        }
        if let Some(v) = metadata.state {
            record.insert("state".to_string(), json!(v));
        }
        if let Some(v) = metadata.read_only {
            record.insert("readOnly".to_string(), json!(v));
        }
        if let Some(v) = metadata.featured {
            record.insert("featured".to_string(), json!(v));
        }
        if let Some(v) = metadata.studio_control {
            record.insert("studioControl".to_string(), json!(v));
        }
        if let Some(v) = metadata.high_frequency {
            record.insert("highFrequency".to_string(), json!(v));
        }
        elements.insert(identifier.clone(), Value::Object(record));
    }
    json!({ "phetioElements": Value::Object(elements) })
}

fuzz_target!(|pair: (FuzzApi, FuzzApi)| {
    let (old, new) = pair;

    let old_api = ApiDescription::from_value(&to_document(&old))
        .expect("generated documents always have a phetioElements object");
    let new_api = ApiDescription::from_value(&to_document(&new))
        .expect("generated documents always have a phetioElements object");

    // Comparing should never panic in either direction
    let _ = compare(&old_api, &new_api);
    let _ = compare(&new_api, &old_api);

    // Comparing a description against itself never reports problems
    assert!(compare(&old_api, &old_api).is_empty());
    assert!(compare(&new_api, &new_api).is_empty());
});
