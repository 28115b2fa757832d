//! Common test utilities and helpers
//!
//! Shared fixture paths and loaders for integration tests.

#![allow(dead_code)]

use edbinds::{ActionMapping, BindingFile, DeviceMap, KeyBindingView};
use std::path::PathBuf;

/// Top-level elements in `Custom.binds`
pub const FIXTURE_BINDING_COUNT: usize = 14;

/// Top-level groups in `Custom.binds`
pub const FIXTURE_GROUP_COUNT: usize = 9;

/// Every node (groups, flattened descendants and leaves) in `Custom.binds`
pub const FIXTURE_NODE_COUNT: usize = 36;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn binding_file() -> BindingFile {
    BindingFile::open(fixture("Custom.binds")).expect("fixture binding file")
}

pub fn action_mappings() -> Vec<ActionMapping> {
    ActionMapping::open(fixture("ActionMappings.json")).expect("fixture action mappings")
}

pub fn keyboard_map() -> DeviceMap {
    DeviceMap::open(fixture("DeviceMappings/Keyboard.json")).expect("fixture keyboard map")
}

pub fn stick_map() -> DeviceMap {
    DeviceMap::open(fixture("DeviceMappings/T16000M.json")).expect("fixture stick map")
}

/// Find a projected row by its group name
pub fn row<'a>(views: &'a [KeyBindingView], group: &str) -> &'a KeyBindingView {
    let var = format!("ed{}", group);
    views
        .iter()
        .find(|v| v.bind_ed_variable == var)
        .unwrap_or_else(|| panic!("no row for {}", group))
}
