//! Shared naming helpers for generated Java members.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "firstName" -> "FirstName", "uRL" -> "URL").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Name of the getter for a field (e.g., "age" -> "getAge").
pub fn getter_name(field: &str) -> String {
    format!("get{}", capitalize(field))
}

/// Name of the builder setter for a field (e.g., "age" -> "setAge").
pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize(field))
}
