use thiserror::Error;

/// Separator used when none is configured or the configured one is rejected.
pub const DEFAULT_SEPARATOR: &str = "::";

/// Tokens the notation grammar reserves for itself.
///
/// A separator equal to any of these would split expressions in the middle of
/// their own syntax, so they are never accepted.
pub const FORBIDDEN_SEPARATORS: [&str; 11] =
    ["((", "))", "(", ")", "[", "]", " ", "$", "\t", "\n", "\0"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid separator {value:?}. Please choose another one.")]
pub struct InvalidSeparator {
    pub value: String,
}

/// Returns true if `candidate` can delimit notation from literal text.
pub fn is_valid_separator(candidate: &str) -> bool {
    !candidate.is_empty() && !FORBIDDEN_SEPARATORS.contains(&candidate)
}

/// Checks `candidate` and hands it back owned, or the rejection.
///
/// Callers decide on the fallback; usually [`DEFAULT_SEPARATOR`].
pub fn validated_separator(candidate: &str) -> Result<String, InvalidSeparator> {
    if is_valid_separator(candidate) {
        Ok(candidate.to_string())
    } else {
        Err(InvalidSeparator {
            value: candidate.to_string(),
        })
    }
}
