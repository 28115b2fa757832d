//! Action metadata table
//!
//! `ActionMappings.json` is an array of records:
//!
//! ```json
//! [
//!   { "Code": "YawLeftButton", "Area": "Ship", "Category": "Flight Rotation", "Action": "Yaw Left" }
//! ]
//! ```

use crate::error::MappingResult;
use crate::mappings::{eq_ignore_case, null_as_default, read_json};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Record field names; keys are matched against these ignoring case
const ACTION_FIELDS: [&str; 4] = ["Code", "Area", "Category", "Action"];

/// Display metadata for one action code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ActionMapping {
    /// Matched case-insensitively against a binding group name
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,

    #[serde(deserialize_with = "null_as_default")]
    pub area: String,

    #[serde(deserialize_with = "null_as_default")]
    pub category: String,

    /// Display name. A missing field is `Some("")`; an explicit `null` is
    /// `None`, which shows the group name instead.
    pub action: Option<String>,
}

impl Default for ActionMapping {
    fn default() -> Self {
        Self {
            code: String::new(),
            area: String::new(),
            category: String::new(),
            action: Some(String::new()),
        }
    }
}

impl ActionMapping {
    /// Load an action mapping table.
    ///
    /// A `null` document loads as an empty table.
    ///
    /// # Errors
    /// Returns `MappingError::Io` if the file cannot be read and
    /// `MappingError::Format` if it is not an array of mapping records.
    pub fn open(path: impl AsRef<Path>) -> MappingResult<Vec<ActionMapping>> {
        let path = path.as_ref();
        let mappings: Vec<ActionMapping> = read_json(path, &ACTION_FIELDS)?;
        debug!(path = %path.display(), count = mappings.len(), "loaded action mappings");
        Ok(mappings)
    }

    /// First mapping whose code matches, ignoring case. Codes need not be unique.
    pub fn find<'a>(mappings: &'a [ActionMapping], code: &str) -> Option<&'a ActionMapping> {
        mappings.iter().find(|m| eq_ignore_case(&m.code, code))
    }
}
