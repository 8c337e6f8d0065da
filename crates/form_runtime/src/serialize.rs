//! Flat key/value payloads built from rendered form controls.

use platform_host::{FormControl, FormControlKind};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::FormError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Payload serialization switches.
pub struct SerializeOptions {
    /// Keep controls whose value is empty.
    pub empty: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Serialized form values keyed by control name.
pub struct FormPayload {
    fields: Map<String, Value>,
    pairs: Vec<(String, String)>,
}

impl FormPayload {
    /// Value stored under a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns true when no control contributed a value.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the payload into a JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Renders the successful `name=value` pairs in document order as an
    /// `application/x-www-form-urlencoded` string. Bracketed names are kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Payload`] when the pairs cannot be encoded.
    pub fn to_query_string(&self) -> Result<String, FormError> {
        serde_urlencoded::to_string(&self.pairs).map_err(|e| FormError::Payload(e.to_string()))
    }

    /// Decodes the payload into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Payload`] when the payload shape does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        serde_json::from_value(Value::Object(self.fields.clone()))
            .map_err(|e| FormError::Payload(e.to_string()))
    }
}

/// Serializes the successful controls of a form.
///
/// Unnamed, disabled, and button-like controls are skipped, as are unchecked checkboxes and
/// radios. `name[]` collects values into an array, `a[b]` nests objects, and a plain name seen
/// twice becomes an array of its values.
pub fn serialize_controls(controls: &[FormControl], options: SerializeOptions) -> FormPayload {
    let mut fields = Map::new();
    let mut pairs = Vec::new();

    for control in controls {
        if control.name.is_empty() || control.disabled || control.kind.is_button_like() {
            continue;
        }
        if matches!(control.kind, FormControlKind::Checkbox | FormControlKind::Radio)
            && !control.checked
        {
            continue;
        }

        let values = match control.kind {
            FormControlKind::Select { multiple: true } => control.selected.clone(),
            _ => vec![control.value.clone()],
        };

        let mut contributed = false;
        for value in values {
            if value.is_empty() && !options.empty {
                continue;
            }
            contributed = true;
            pairs.push((control.name.clone(), value.clone()));
            assign(&mut fields, &control.name, Value::String(value));
        }

        if !contributed && options.empty {
            if let FormControlKind::Select { multiple: true } = control.kind {
                pairs.push((control.name.clone(), String::new()));
                assign(&mut fields, &control.name, Value::String(String::new()));
            }
        }
    }

    FormPayload { fields, pairs }
}

fn assign(fields: &mut Map<String, Value>, name: &str, value: Value) {
    let (root, path) = split_key(name);
    let slot = fields.entry(root.to_string());
    match slot {
        serde_json::map::Entry::Vacant(entry) => {
            if path.is_empty() {
                entry.insert(value);
            } else {
                let mut nested = Value::Null;
                assign_path(&mut nested, &path, value);
                entry.insert(nested);
            }
        }
        serde_json::map::Entry::Occupied(mut entry) => {
            if path.is_empty() {
                merge_plain(entry.get_mut(), value);
            } else {
                assign_path(entry.get_mut(), &path, value);
            }
        }
    }
}

fn merge_plain(existing: &mut Value, value: Value) {
    match existing {
        Value::Array(items) => items.push(value),
        other => {
            let previous = std::mem::take(other);
            *other = Value::Array(vec![previous, value]);
        }
    }
}

fn assign_path(target: &mut Value, path: &[&str], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        merge_or_set(target, value);
        return;
    };

    if head.is_empty() {
        if !target.is_array() {
            *target = match std::mem::take(target) {
                Value::Null => Value::Array(Vec::new()),
                other => Value::Array(vec![other]),
            };
        }
        if let Value::Array(items) = target {
            if rest.is_empty() {
                items.push(value);
            } else {
                let mut nested = Value::Null;
                assign_path(&mut nested, rest, value);
                items.push(nested);
            }
        }
        return;
    }

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        let child = map.entry(head.to_string()).or_insert(Value::Null);
        assign_path(child, rest, value);
    }
}

fn merge_or_set(target: &mut Value, value: Value) {
    if target.is_null() {
        *target = value;
    } else {
        merge_plain(target, value);
    }
}

/// Splits `a[b][]` into `("a", ["b", ""])`. Names without brackets have an empty path.
fn split_key(name: &str) -> (&str, Vec<&str>) {
    let Some(open) = name.find('[') else {
        return (name, Vec::new());
    };
    if !name.ends_with(']') || open == 0 {
        return (name, Vec::new());
    }
    let root = &name[..open];
    let path = name[open + 1..name.len() - 1].split("][").collect();
    (root, path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn skips_unsuccessful_controls() {
        let controls = vec![
            FormControl::text("name", "Ada"),
            FormControl::text("", "unnamed"),
            FormControl::text("locked", "x").disabled(true),
            FormControl::new("go", "Save", FormControlKind::Submit),
            FormControl::new("agree", "on", FormControlKind::Checkbox),
            FormControl::new("news", "yes", FormControlKind::Checkbox).checked(true),
            FormControl::text("nickname", ""),
        ];

        let payload = serialize_controls(&controls, SerializeOptions::default());

        assert_eq!(payload.into_value(), json!({ "name": "Ada", "news": "yes" }));
    }

    #[test]
    fn empty_values_are_kept_on_request() {
        let controls = vec![FormControl::text("nickname", "")];
        let payload = serialize_controls(&controls, SerializeOptions { empty: true });
        assert_eq!(payload.get("nickname"), Some(&json!("")));
    }

    #[test]
    fn bracket_names_build_arrays_and_objects() {
        let controls = vec![
            FormControl::text("tags[]", "a"),
            FormControl::text("tags[]", "b"),
            FormControl::text("user[name]", "Ada"),
            FormControl::text("user[roles][]", "admin"),
            FormControl::text("color", "red"),
            FormControl::text("color", "blue"),
        ];

        let payload = serialize_controls(&controls, SerializeOptions::default());

        assert_eq!(
            payload.into_value(),
            json!({
                "tags": ["a", "b"],
                "user": { "name": "Ada", "roles": ["admin"] },
                "color": ["red", "blue"],
            })
        );
    }

    #[test]
    fn radios_and_multi_selects_contribute_selected_values() {
        let controls = vec![
            FormControl::new("size", "s", FormControlKind::Radio),
            FormControl::new("size", "m", FormControlKind::Radio).checked(true),
            FormControl::new("langs[]", "", FormControlKind::Select { multiple: true })
                .with_selected(["rust", "go"]),
        ];

        let payload = serialize_controls(&controls, SerializeOptions::default());

        assert_eq!(
            payload.into_value(),
            json!({ "size": "m", "langs": ["rust", "go"] })
        );
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct SignUp {
        name: String,
        email: String,
    }

    #[test]
    fn payload_decodes_into_typed_values() {
        let controls = vec![
            FormControl::text("name", "Ada"),
            FormControl::text("email", "ada@example.com"),
        ];
        let payload = serialize_controls(&controls, SerializeOptions::default());

        let decoded: SignUp = payload.decode().expect("decode");
        assert_eq!(
            decoded,
            SignUp {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }
        );

        let missing = serialize_controls(&controls[..1], SerializeOptions::default());
        assert!(matches!(
            missing.decode::<SignUp>(),
            Err(FormError::Payload(_))
        ));
    }

    #[test]
    fn query_string_keeps_document_order_and_bracket_names() {
        let controls = vec![
            FormControl::text("name", "Ada L"),
            FormControl::text("tags[]", "a"),
            FormControl::text("email", "ada@example.com"),
            FormControl::text("tags[]", "b"),
            FormControl::new("go", "Save", FormControlKind::Submit),
        ];

        let payload = serialize_controls(&controls, SerializeOptions::default());

        assert_eq!(
            payload.to_query_string(),
            Ok("name=Ada+L&tags%5B%5D=a&email=ada%40example.com&tags%5B%5D=b".to_string())
        );
        assert_eq!(FormPayload::default().to_query_string(), Ok(String::new()));
    }

    #[test]
    fn malformed_brackets_are_treated_as_plain_names() {
        assert_eq!(split_key("a[b"), ("a[b", Vec::new()));
        assert_eq!(split_key("[x]"), ("[x]", Vec::new()));
        assert_eq!(split_key("a[b][]"), ("a", vec!["b", ""]));
    }
}
