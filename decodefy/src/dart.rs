//! Dart source layout for a [`ClassDef`].

use std::io::Write;

use crate::model::{ClassDef, FieldDef, FieldKind};

/// Escape a string for use inside a Dart double-quoted string literal.
fn escape_for_dart_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
}

/// Statement assigning `field` inside the `fromJson` constructor body.
fn from_json_statement(field: &FieldDef) -> String {
    let name: &str = &field.name;
    let lookup: String = format!("json[\"{}\"]", escape_for_dart_string(name));
    match &field.kind {
        FieldKind::Scalar { default } => format!("{name} = {lookup} ?? {default};"),
        FieldKind::Object { class_name } => {
            format!("{name} = {lookup} != null ? {class_name}.fromJson({lookup}) : null;")
        }
        FieldKind::ObjectList { class_name } => format!(
            "{name} = {lookup} != null ? List<{class_name}>.from({lookup}.map((x) => {class_name}.fromJson(x))) : null;"
        ),
        FieldKind::Raw => format!("{name} = {lookup};"),
    }
}

/// `"key": value` entry of the `toJson` map literal.
fn to_json_entry(field: &FieldDef) -> String {
    let name: &str = &field.name;
    let value: String = match &field.kind {
        FieldKind::Object { .. } => format!("{name} != null ? {name}!.toJson() : null"),
        FieldKind::ObjectList { .. } => {
            format!("{name} != null ? {name}!.map((item) => item.toJson()).toList() : null")
        }
        FieldKind::Scalar { .. } | FieldKind::Raw => name.to_string(),
    };
    format!("\"{}\": {value}", escape_for_dart_string(name))
}

/// Emit a single Dart class: nullable fields, a named-parameter constructor,
/// a `fromJson` named constructor, and `toJson`.
///
/// The output ends with `}` and a newline.
pub fn emit_class<W: Write>(class: &ClassDef, writer: &mut W) -> std::io::Result<()> {
    let name: &str = &class.name;
    writeln!(writer, "class {name} {{")?;
    for field in &class.fields {
        writeln!(writer, "  {}? {};", field.ty, field.name)?;
    }

    writeln!(writer)?;
    if class.fields.is_empty() {
        writeln!(writer, "  {name}();")?;
    } else {
        let params: Vec<String> = class
            .fields
            .iter()
            .map(|field| format!("this.{}", field.name))
            .collect();
        writeln!(writer, "  {name}({{{}}});", params.join(", "))?;
    }

    writeln!(writer)?;
    writeln!(writer, "  {name}.fromJson(Map<String, dynamic> json){{")?;
    for field in &class.fields {
        writeln!(writer, "    {}", from_json_statement(field))?;
    }
    writeln!(writer, "  }}")?;

    writeln!(writer)?;
    let entries: Vec<String> = class.fields.iter().map(to_json_entry).collect();
    writeln!(
        writer,
        "  Map<String, dynamic> toJson() => {{{}}};",
        entries.join(", ")
    )?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Emit classes in the given order, separated by a blank line.
pub fn emit_classes<'a, W: Write>(
    classes: impl IntoIterator<Item = &'a ClassDef>,
    writer: &mut W,
) -> std::io::Result<()> {
    for (index, class) in classes.into_iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
            writeln!(writer)?;
        }
        emit_class(class, writer)?;
    }
    Ok(())
}
