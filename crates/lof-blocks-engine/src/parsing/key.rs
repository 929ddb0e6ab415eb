use crate::parameters::StyleMap;

/// Converts a hyphenated CSS key into its compound style-key.
///
/// `font-size` becomes `fontSize`. Keys without hyphens come back unchanged,
/// so already-converted keys are stable.
pub fn normalize_key(key: &str) -> String {
    let mut parts = key.trim().split('-');
    let mut out = parts.next().unwrap_or_default().to_string();

    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

/// Converts a compound style-key back into CSS form: `fontSize` -> `font-size`.
///
/// Every upper-case letter starts a new hyphenated component, which also
/// turns vendor keys like `WebkitTransition` into `-webkit-transition`.
pub fn to_css_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Renders a style map as CSS declarations, one `key: value;` per line.
pub fn to_css_string(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {value};\n", to_css_key(key)))
        .collect()
}
