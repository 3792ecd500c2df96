//! Generate Dart model classes from a sample JSON document.
//!
//! Every JSON object becomes a class with nullable fields, a named-parameter
//! constructor, a `fromJson` named constructor and a `toJson` method. Nested
//! objects (and arrays whose first element is an object) become nested classes
//! named after their key.

mod classify;
mod codegen;
mod dart;
mod error;
mod model;
mod naming;
mod settings;

pub use classify::{JsonKind, classify_type};
pub use codegen::{build_classes, emission_order, find_name_collisions};
pub use error::DecodefyError;
pub use model::{ClassDef, DartType, FieldDef, FieldKind};
pub use naming::{MODEL_FILE_EXTENSION, output_file_name, to_snake_case};
pub use settings::GenerateSettings;

use std::io::Write;
use std::path::PathBuf;

/// Generate Dart classes from a JSON string and write them to `writer`.
///
/// The whole document is parsed and classified before the first byte reaches
/// `writer`, so a `Vec<u8>` or stdout works as well as a file.
///
/// # Errors
///
/// Returns `DecodefyError` if the JSON is invalid, its top-level value is not an
/// object, or writing to the writer fails. Nothing is written on a JSON error.
pub fn generate_to_writer<W: Write>(
    class_name: &str,
    json: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), DecodefyError> {
    codegen::generate_to_writer(class_name, json, writer, settings)
}

/// Generate Dart classes from a JSON string and return them as a `String`.
///
/// # Errors
///
/// Returns `DecodefyError` if the JSON is invalid or its top-level value is not
/// an object.
pub fn generate_to_string(
    class_name: &str,
    json: &str,
    settings: &GenerateSettings,
) -> Result<String, DecodefyError> {
    let mut buffer: Vec<u8> = Vec::new();
    generate_to_writer(class_name, json, &mut buffer, settings)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Generate Dart classes from a JSON string and write them to
/// `<snake_case(class_name)>_model.dart` inside `settings.output_dir`.
///
/// The JSON is parsed before the file is created, so invalid input leaves no
/// file behind. Returns the path written.
///
/// # Errors
///
/// Returns `DecodefyError` if the JSON is invalid, its top-level value is not an
/// object, or creating or writing the output file fails.
pub fn generate_to_file(
    class_name: &str,
    json: &str,
    settings: &GenerateSettings,
) -> Result<PathBuf, DecodefyError> {
    let source: String = generate_to_string(class_name, json, settings)?;
    let output_path: PathBuf = settings.output_dir.join(output_file_name(class_name));
    let mut output_file: std::fs::File = std::fs::File::create(&output_path)?;
    output_file.write_all(source.as_bytes())?;
    tracing::info!(path = %output_path.display(), bytes = source.len(), "wrote model file");
    Ok(output_path)
}
