//! Label text bound to the two toggle states.

use serde::{Deserialize, Serialize};

/// Text rendered for the checked and unchecked toggle states.
///
/// Either label may be omitted by callers, in which case it is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPair {
    /// Text shown while the toggle is on.
    pub checked: String,
    /// Text shown while the toggle is off.
    pub unchecked: String,
}

impl LabelPair {
    /// Build a label pair from any string-like inputs.
    #[must_use]
    pub fn new(checked: impl Into<String>, unchecked: impl Into<String>) -> Self {
        Self {
            checked: checked.into(),
            unchecked: unchecked.into(),
        }
    }
}
