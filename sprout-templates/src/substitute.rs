//! Placeholder substitution for template bodies.
//!
//! Bodies mark interpolation sites with `{{name}}`. Substitution is plain
//! text replacement; there are no loops, conditionals or escaping.

/// Replace every `{{key}}` in `body` with its value.
pub fn substitute(body: &str, values: &[(&str, &str)]) -> String {
    let mut out = body.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}

/// Whether `text` still contains a `{{...}}` placeholder.
pub fn has_placeholder(text: &str) -> bool {
    match text.find("{{") {
        Some(start) => text[start..].contains("}}"),
        None => false,
    }
}
