use crate::classify::{classify_field, nested_object};
use crate::dart;
use crate::error::DecodefyError;
use crate::model::{ClassDef, FieldDef};
use crate::naming::capitalize;
use crate::settings::GenerateSettings;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::Write;

/// Recursively collect `object` and every object nested in it into `collected`.
///
/// A class is pushed before any of its nested classes; nested classes follow
/// depth-first in key order.
fn collect_classes(class_name: &str, object: &Map<String, Value>, collected: &mut Vec<ClassDef>) {
    let fields: Vec<FieldDef> = object
        .iter()
        .map(|(key, value)| classify_field(key, value))
        .collect();
    let class: ClassDef = ClassDef {
        name: class_name.to_string(),
        fields,
    };
    tracing::debug!(
        class = class_name,
        fields = class.fields.len(),
        nested = ?class.nested_class_names().collect::<Vec<_>>(),
        "collected class"
    );
    collected.push(class);

    for (key, value) in object {
        if let Some(nested) = nested_object(value) {
            collect_classes(&capitalize(key), nested, collected);
        }
    }
}

/// Build the class for `object` and all of its nested classes, in collection
/// order: the top-level class first, then nested classes depth-first.
#[must_use]
pub fn build_classes(class_name: &str, object: &Map<String, Value>) -> Vec<ClassDef> {
    let mut collected: Vec<ClassDef> = Vec::new();
    collect_classes(class_name, object, &mut collected);
    collected
}

/// Determine emission order: the collection order reversed, so the last
/// nested class discovered comes first and the top-level class comes last.
///
/// Every nested class still precedes the class that refers to it, but only
/// because of how collection orders them.
// TODO: switch to an explicit dependency sort once no consumer relies on this
// exact sibling order (last-discovered first).
#[must_use]
pub fn emission_order(classes: &[ClassDef]) -> Vec<&ClassDef> {
    classes.iter().rev().collect()
}

/// Class names generated more than once, alphabetically.
///
/// Colliding classes are all emitted; nothing is merged or renamed.
#[must_use]
pub fn find_name_collisions(classes: &[ClassDef]) -> Vec<&str> {
    let mut name_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for class in classes {
        *name_counts.entry(class.name.as_str()).or_insert(0) += 1;
    }
    name_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

fn report_diagnostics(classes: &[ClassDef], settings: &GenerateSettings) {
    if !settings.suppress_collision_warnings {
        for name in find_name_collisions(classes) {
            tracing::warn!(class = name, "class name generated more than once");
        }
    }
    if classes.iter().any(|class| class.name.is_empty()) {
        tracing::warn!("a nested class generated from an empty key has an empty name");
    }
}

/// Parse `json` and collect its classes, in collection order.
fn parse_classes(
    class_name: &str,
    json: &str,
    settings: &GenerateSettings,
) -> Result<Vec<ClassDef>, DecodefyError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(object) = value else {
        return Err(DecodefyError::RootNotObjectError);
    };

    let classes: Vec<ClassDef> = build_classes(class_name, &object);
    report_diagnostics(&classes, settings);
    Ok(classes)
}

/// Generate Dart classes for `json` under `class_name` and write them to `writer`.
pub fn generate_to_writer<W: Write>(
    class_name: &str,
    json: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), DecodefyError> {
    let classes: Vec<ClassDef> = parse_classes(class_name, json, settings)?;
    dart::emit_classes(emission_order(&classes), writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generate(class_name: &str, json: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        generate_to_writer(class_name, json, &mut out, &GenerateSettings::default())
            .expect("generate");
        String::from_utf8(out).expect("utf8")
    }

    fn object(value: &Value) -> &Map<String, Value> {
        value.as_object().expect("object")
    }

    fn names<'a>(classes: impl IntoIterator<Item = &'a ClassDef>) -> Vec<&'a str> {
        classes.into_iter().map(|class| class.name.as_str()).collect()
    }

    #[test]
    fn generate_primitive_fields() {
        let actual: String = generate("User", r#"{"name":"Ann","age":30,"active":true}"#);
        let expected: &str = r#"class User {
  String? name;
  int? age;
  bool? active;

  User({this.name, this.age, this.active});

  User.fromJson(Map<String, dynamic> json){
    name = json["name"] ?? "";
    age = json["age"] ?? 0;
    active = json["active"] ?? false;
  }

  Map<String, dynamic> toJson() => {"name": name, "age": age, "active": active};
}
"#;
        assert_eq!(expected, actual);
    }

    #[test]
    fn generate_float_and_null_fields() {
        let actual: String = generate("Reading", r#"{"value":1.5,"unit":null}"#);
        let expected: &str = r#"class Reading {
  double? value;
  String? unit;

  Reading({this.value, this.unit});

  Reading.fromJson(Map<String, dynamic> json){
    value = json["value"] ?? 0.0;
    unit = json["unit"];
  }

  Map<String, dynamic> toJson() => {"value": value, "unit": unit};
}
"#;
        assert_eq!(expected, actual);
    }

    #[test]
    fn generate_nested_object_emits_nested_class_first() {
        let actual: String = generate(
            "User",
            r#"{"name":"Ann","address":{"city":"Oslo","zip":1234}}"#,
        );
        let expected: &str = r#"class Address {
  String? city;
  int? zip;

  Address({this.city, this.zip});

  Address.fromJson(Map<String, dynamic> json){
    city = json["city"] ?? "";
    zip = json["zip"] ?? 0;
  }

  Map<String, dynamic> toJson() => {"city": city, "zip": zip};
}


class User {
  String? name;
  Address? address;

  User({this.name, this.address});

  User.fromJson(Map<String, dynamic> json){
    name = json["name"] ?? "";
    address = json["address"] != null ? Address.fromJson(json["address"]) : null;
  }

  Map<String, dynamic> toJson() => {"name": name, "address": address != null ? address!.toJson() : null};
}
"#;
        assert_eq!(expected, actual);
    }

    #[test]
    fn generate_array_of_objects() {
        let actual: String = generate("Order", r#"{"items":[{"sku":"A1"},{"sku":"B2"}]}"#);
        let expected: &str = r#"class Items {
  String? sku;

  Items({this.sku});

  Items.fromJson(Map<String, dynamic> json){
    sku = json["sku"] ?? "";
  }

  Map<String, dynamic> toJson() => {"sku": sku};
}


class Order {
  List<Items>? items;

  Order({this.items});

  Order.fromJson(Map<String, dynamic> json){
    items = json["items"] != null ? List<Items>.from(json["items"].map((x) => Items.fromJson(x))) : null;
  }

  Map<String, dynamic> toJson() => {"items": items != null ? items!.map((item) => item.toJson()).toList() : null};
}
"#;
        assert_eq!(expected, actual);
    }

    #[test]
    fn generate_lists_of_scalars_and_empty_lists() {
        let actual: String = generate("Post", r#"{"tags":["a","b"],"likes":[]}"#);
        let expected: &str = r#"class Post {
  List<String>? tags;
  List<dynamic>? likes;

  Post({this.tags, this.likes});

  Post.fromJson(Map<String, dynamic> json){
    tags = json["tags"];
    likes = json["likes"];
  }

  Map<String, dynamic> toJson() => {"tags": tags, "likes": likes};
}
"#;
        assert_eq!(expected, actual);
    }

    #[test]
    fn build_classes_collects_parent_before_children_depth_first() {
        let value: Value = json!({
            "address": {"geo": {"lat": 1.5}},
            "items": [{"id": 1}],
            "name": "Ann"
        });
        let classes: Vec<ClassDef> = build_classes("User", object(&value));
        assert_eq!(vec!["User", "Address", "Geo", "Items"], names(&classes));
    }

    #[test]
    fn emission_order_is_collection_order_reversed() {
        let value: Value = json!({
            "address": {"geo": {"lat": 1.5}},
            "items": [{"id": 1}]
        });
        let classes: Vec<ClassDef> = build_classes("User", object(&value));
        let actual: Vec<&str> = names(emission_order(&classes));
        assert_eq!(vec!["Items", "Geo", "Address", "User"], actual);
    }

    #[test]
    fn build_classes_uses_only_first_array_element() {
        let value: Value = json!({"items": [{"id": 1}, {"other": "x"}]});
        let classes: Vec<ClassDef> = build_classes("Order", object(&value));
        let items: &ClassDef = classes
            .iter()
            .find(|class| class.name == "Items")
            .expect("Items class");
        let field_names: Vec<&str> = items.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(vec!["id"], field_names);
    }

    #[test]
    fn build_classes_keeps_colliding_names() {
        let value: Value = json!({
            "home": {"address": {"city": "Oslo"}},
            "work": {"address": {"street": "Main"}}
        });
        let classes: Vec<ClassDef> = build_classes("Person", object(&value));
        assert_eq!(
            vec!["Person", "Home", "Address", "Work", "Address"],
            names(&classes)
        );
        assert_eq!(vec!["Address"], find_name_collisions(&classes));
    }

    #[test]
    fn find_name_collisions_none_for_distinct_names() {
        let value: Value = json!({"a": {"x": 1}, "b": {"y": 2}});
        let classes: Vec<ClassDef> = build_classes("Root", object(&value));
        assert!(find_name_collisions(&classes).is_empty());
    }

    #[test]
    fn build_classes_empty_object() {
        let value: Value = json!({});
        let classes: Vec<ClassDef> = build_classes("Empty", object(&value));
        assert_eq!(1, classes.len());
        assert!(classes[0].fields.is_empty());
    }

    #[test]
    fn generate_preserves_key_order() {
        let actual: String = generate("Point", r#"{"z":1,"a":2,"m":3}"#);
        assert!(actual.contains("  Point({this.z, this.a, this.m});\n"));
    }

    #[test]
    fn generate_rejects_invalid_json() {
        let mut out: Vec<u8> = Vec::new();
        let result: Result<(), DecodefyError> =
            generate_to_writer("User", r#"{"bad json""#, &mut out, &GenerateSettings::default());
        assert!(matches!(result, Err(DecodefyError::InvalidInputError(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn generate_rejects_non_object_root() {
        let mut out: Vec<u8> = Vec::new();
        let result: Result<(), DecodefyError> =
            generate_to_writer("User", "[1, 2]", &mut out, &GenerateSettings::default());
        assert!(matches!(result, Err(DecodefyError::RootNotObjectError)));
        assert!(out.is_empty());
    }
}
