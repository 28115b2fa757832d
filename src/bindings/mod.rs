//! Binding file model and parser
//!
//! Turns an exported `.binds` document into a tree of [`BindingNode`]s.

pub mod document;
pub mod file;
pub mod node;

pub use file::{BindingFile, DEFAULT_KEYBOARD_LAYOUT};
pub use node::{BindingGroup, BindingNode, DeviceBinding, make_binding};
