//! Binding file loading
//!
//! Reads an exported `.binds` document into a [`BindingFile`].

use crate::bindings::document::{Element, parse_document};
use crate::bindings::node::{BindingGroup, BindingNode};
use crate::error::{BindingError, BindingResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Layout assumed when the document does not declare one
pub const DEFAULT_KEYBOARD_LAYOUT: &str = "en-US";

const KEYBOARD_LAYOUT: &str = "KeyboardLayout";

/// A parsed binding file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingFile {
    /// Source path, kept for display
    pub file_name: PathBuf,
    pub keyboard_layout: String,
    /// One node per direct child of the root element, in document order
    pub bindings: Vec<BindingNode>,
}

impl BindingFile {
    /// Read and parse a binding file from disk.
    ///
    /// # Errors
    /// Returns `BindingError::Io` if the file cannot be read and
    /// `BindingError::Format` if it is not a well-formed document.
    pub fn open(path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| BindingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|e| BindingError::Format {
            path: path.to_path_buf(),
            message: format!("not valid UTF-8: {}", e),
        })?;
        let file = Self::parse(path, &content)?;
        debug!(
            path = %path.display(),
            layout = %file.keyboard_layout,
            bindings = file.bindings.len(),
            "loaded binding file"
        );
        Ok(file)
    }

    /// Parse binding file content. `file_name` is only used for display and errors.
    pub fn parse(file_name: impl Into<PathBuf>, xml: &str) -> BindingResult<Self> {
        let file_name = file_name.into();
        let root = parse_document(xml).map_err(|e| BindingError::Format {
            path: file_name.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            keyboard_layout: keyboard_layout(&root),
            bindings: root.child_elements().map(BindingNode::from_element).collect(),
            file_name,
        })
    }

    /// Top-level groups, skipping leaf settings such as `<MouseXMode/>`
    pub fn groups(&self) -> impl Iterator<Item = &BindingGroup> {
        self.bindings.iter().filter_map(BindingNode::as_group)
    }

    /// File name without directories, for status lines
    pub fn display_name(&self) -> String {
        self.file_name
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name.display().to_string())
    }
}

/// Root attribute first, then a `<KeyboardLayout>` child element, then the default.
fn keyboard_layout(root: &Element) -> String {
    let from_attribute = root.attribute(KEYBOARD_LAYOUT).map(str::to_string);
    let from_element = || {
        root.child_elements()
            .find(|el| el.name == KEYBOARD_LAYOUT)
            .map(Element::text)
    };

    from_attribute
        .into_iter()
        .chain(from_element())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_KEYBOARD_LAYOUT.to_string())
}
