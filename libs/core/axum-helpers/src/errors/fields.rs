//! Field-level validation failures, keyed the way clients see them.

use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

/// Field name (PascalCase) to every message raised against it
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Collect every failure in `errors`, one entry per field.
///
/// Rust field names (`image_url`) become `ImageUrl`. A rule without an
/// explicit message gets a generic one naming the field and the rule.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();

    for (field, failures) in errors.field_errors() {
        let name = pascal_case(&field);
        let messages = failures
            .iter()
            .map(|failure| message_for(&name, failure))
            .collect::<Vec<_>>();
        map.entry(name).or_default().extend(messages);
    }

    map
}

pub fn pascal_case(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn message_for(field: &str, failure: &ValidationError) -> String {
    match &failure.message {
        Some(message) => message.to_string(),
        None => format!("'{}' failed the '{}' rule.", field, failure.code),
    }
}
