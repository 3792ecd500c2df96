//! Structured model of the classes to emit, independent of their text layout.

use std::fmt;

/// Dart type of a generated field (without the nullable `?` suffix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DartType {
    String,
    Int,
    Double,
    Bool,
    /// A generated class, named after the key it was found under.
    Class(String),
    /// `List<T>`, typed by the array's first element.
    List(Box<DartType>),
    /// `List<dynamic>`, inferred from an empty array.
    DynamicList,
}

impl fmt::Display for DartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Int => f.write_str("int"),
            Self::Double => f.write_str("double"),
            Self::Bool => f.write_str("bool"),
            Self::Class(name) => f.write_str(name),
            Self::List(element) => write!(f, "List<{element}>"),
            Self::DynamicList => f.write_str("List<dynamic>"),
        }
    }
}

/// How a field is read from `fromJson` and written by `toJson`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// String, number, or boolean; `default` replaces an absent or null key.
    Scalar { default: &'static str },
    /// Nested object, read through `<class_name>.fromJson`.
    Object { class_name: String },
    /// Array of objects, each element read through `<class_name>.fromJson`.
    ObjectList { class_name: String },
    /// Anything else (null, arrays of scalars, empty or nested arrays); passed
    /// through as is.
    Raw,
}

/// A single field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// JSON key, used verbatim as the Dart member name.
    pub name: String,
    pub ty: DartType,
    pub kind: FieldKind,
}

/// A class to be emitted, with its fields in JSON key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl ClassDef {
    /// Names of the nested classes this class refers to, in field order.
    pub fn nested_class_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|field| match &field.kind {
            FieldKind::Object { class_name } | FieldKind::ObjectList { class_name } => {
                Some(class_name.as_str())
            }
            FieldKind::Scalar { .. } | FieldKind::Raw => None,
        })
    }
}
