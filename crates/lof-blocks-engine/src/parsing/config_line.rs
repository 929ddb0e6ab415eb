use crate::parameters::ParameterOverride;

use super::key::normalize_key;

/// Declaration terminator.
pub const DECLARATION_END: char = ';';
/// Splits a declaration into key and value. Only the first one counts.
pub const KEY_VALUE: char = ':';
/// Key that sets the separator instead of a style.
pub const SEPARATOR_KEY: &str = "separator";

/// Parses `key: value; key: value;` into a partial parameter set.
///
/// Declarations are split at their first colon, so values such as `::` or
/// `url(http://..)` survive intact. A declaration whose key or value slice is
/// empty is dropped, as is one without any colon. Repeated keys: last wins.
pub fn parse_configuration_line(text: &str) -> ParameterOverride {
    let mut parameters = ParameterOverride::default();

    for declaration in text
        .split(DECLARATION_END)
        .filter(|d| !d.trim().is_empty())
    {
        let Some((key, value)) = declaration.split_once(KEY_VALUE) else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }

        if key.trim() == SEPARATOR_KEY {
            parameters.separator = Some(value.trim().to_string());
        } else {
            parameters
                .style
                .insert(normalize_key(key), value.trim().to_string());
        }
    }

    parameters
}
