//! Binding view projection
//!
//! Joins a binding group with the action metadata table and the active
//! device map, producing one flat [`KeyBindingView`] row per group. Nothing
//! here fails: every unresolved piece falls back to raw values.

use crate::bindings::{BindingFile, BindingGroup, BindingNode, DeviceBinding};
use crate::mappings::{ActionMapping, DeviceMap};
use serde::Serialize;

/// Leaf names holding the primary assignment (axes use `Binding`)
pub const PRIMARY_NAMES: [&str; 2] = ["Binding", "Primary"];

/// Leaf name holding the secondary assignment
pub const SECONDARY_NAME: &str = "Secondary";

/// One display row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyBindingView {
    pub area: String,
    pub category: String,
    pub action: String,
    pub primary_device: String,
    pub primary_key: String,
    /// `None` when the group has no `Secondary` leaf at all
    pub secondary_device: Option<String>,
    pub secondary_key: Option<String>,
    /// `"ed" + group name`, stable regardless of display text
    pub bind_ed_variable: String,
}

/// Project one binding group into a view row.
pub fn project(
    group: &BindingGroup,
    device_map: &DeviceMap,
    action_mappings: &[ActionMapping],
) -> KeyBindingView {
    let mut view = KeyBindingView::default();

    match ActionMapping::find(action_mappings, &group.name) {
        Some(mapping) => {
            view.area = mapping.area.clone();
            view.category = mapping.category.clone();
            view.action = mapping.action.clone().unwrap_or_else(|| group.name.clone());
        }
        None => view.action = group.name.clone(),
    }

    if let Some(primary) = group.first_leaf_named(&PRIMARY_NAMES) {
        let (device, key) = resolve_labels(primary, device_map);
        view.primary_device = device.unwrap_or_default();
        view.primary_key = key.unwrap_or_default();
    }

    if let Some(secondary) = group.first_leaf_named(&[SECONDARY_NAME]) {
        let (device, key) = resolve_labels(secondary, device_map);
        view.secondary_device = device;
        view.secondary_key = key;
    }

    view.bind_ed_variable = bind_ed_variable(&group.name);
    view
}

/// Project a node if it is a group; leaves have no view.
pub fn project_node(
    node: &BindingNode,
    device_map: &DeviceMap,
    action_mappings: &[ActionMapping],
) -> Option<KeyBindingView> {
    node.as_group()
        .map(|group| project(group, device_map, action_mappings))
}

/// Project every top-level group of a file, in document order.
pub fn project_all(
    file: &BindingFile,
    device_map: &DeviceMap,
    action_mappings: &[ActionMapping],
) -> Vec<KeyBindingView> {
    file.groups()
        .map(|group| project(group, device_map, action_mappings))
        .collect()
}

/// Resolved labels when the device map knows the control, raw ids otherwise
fn resolve_labels(
    binding: &DeviceBinding,
    device_map: &DeviceMap,
) -> (Option<String>, Option<String>) {
    match device_map.resolve(binding) {
        Some(control) => (
            Some(control.device_name.clone()),
            Some(control.control_label.clone()),
        ),
        None => (binding.device.clone(), binding.key.clone()),
    }
}

fn bind_ed_variable(group_name: &str) -> String {
    if group_name.is_empty() {
        "edUnknown".to_string()
    } else {
        format!("ed{}", group_name)
    }
}
