//! Example matching the README: a document with scalars, a nested object, an
//! array of objects, and a list of strings.
//!
//! Generated Dart is written to stdout instead of a model file.

use std::io;

const SAMPLE_JSON: &str = r#"{
  "id": 42,
  "name": "Ann",
  "score": 9.5,
  "active": true,
  "address": { "street": "Main St", "geo": { "lat": 59.91, "lng": 10.75 } },
  "orders": [ { "sku": "A1", "quantity": 2 } ],
  "tags": ["admin", "beta"],
  "notes": []
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout: io::Stdout = io::stdout();
    let settings = decodefy::GenerateSettings::default();
    decodefy::generate_to_writer("UserProfile", SAMPLE_JSON, &mut stdout, &settings)?;
    Ok(())
}
