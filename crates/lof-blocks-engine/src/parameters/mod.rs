//! # Block Parameters
//!
//! The configuration unit shared by the settings store, the header parser and
//! the renderer.
//!
//! - **`ParameterSet`**: always fully formed (style map plus separator)
//! - **`ParameterOverride`**: a partial set as declared in one block header
//! - **`merge`**: layers an override over a base without touching the base
//!
//! Style keys are stored in compound form (`fontSize`), see
//! [`crate::parsing::key::normalize_key`].

pub mod separator;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use separator::{
    DEFAULT_SEPARATOR, FORBIDDEN_SEPARATORS, InvalidSeparator, is_valid_separator,
    validated_separator,
};

/// Style declarations keyed by compound style-key.
pub type StyleMap = BTreeMap<String, String>;

/// Effective configuration for rendering one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub style: StyleMap,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            style: StyleMap::new(),
            separator: default_separator(),
        }
    }
}

/// Parameters declared by a block header.
///
/// `separator` is only `Some` when the header names one explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterOverride {
    pub style: StyleMap,
    pub separator: Option<String>,
}

impl ParameterOverride {
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.separator.is_none()
    }
}

impl From<ParameterSet> for ParameterOverride {
    fn from(set: ParameterSet) -> Self {
        Self {
            style: set.style,
            separator: Some(set.separator),
        }
    }
}

/// Layers `over` on top of `base` and returns the result as a new set.
///
/// Style keys from both sides survive, `over` wins on collision. The
/// separator comes from `over` when declared and valid; an invalid one is
/// dropped in favour of the base's.
pub fn merge(base: &ParameterSet, over: &ParameterOverride) -> ParameterSet {
    let mut merged = base.clone();

    merged
        .style
        .extend(over.style.iter().map(|(k, v)| (k.clone(), v.clone())));

    if let Some(candidate) = &over.separator {
        match validated_separator(candidate) {
            Ok(separator) => merged.separator = separator,
            Err(e) => log::warn!("ignoring block separator: {e}"),
        }
    }

    merged
}
