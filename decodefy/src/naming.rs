//! Naming conventions for generated classes and output files.

/// Extension of every generated model file.
pub const MODEL_FILE_EXTENSION: &str = "dart";

/// Capitalize the first character of a JSON key to form a nested class name.
///
/// Only the first character changes: `"userInfo"` -> `"UserInfo"`,
/// `"user_info"` -> `"User_info"`.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars: std::str::Chars<'_> = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a `PascalCase` class name to `snake_case`.
///
/// An underscore goes before every ASCII uppercase letter except a leading one,
/// then the whole string is lowercased. Acronyms are not grouped:
/// `"HTTPServer"` -> `"h_t_t_p_server"`.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result: String = String::with_capacity(s.len() + 4);
    for (index, c) in s.chars().enumerate() {
        if index > 0 && c.is_ascii_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// File name the model for `class_name` is written to: `<snake_case>_model.dart`.
#[must_use]
pub fn output_file_name(class_name: &str) -> String {
    format!("{}_model.{MODEL_FILE_EXTENSION}", to_snake_case(class_name))
}
