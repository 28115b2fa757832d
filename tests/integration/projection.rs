//! End-to-end projection of the fixture export

use crate::common::{FIXTURE_GROUP_COUNT, action_mappings, binding_file, keyboard_map, row, stick_map};
use edbinds::export::{ExportFormat, to_csv};
use edbinds::{DeviceMap, filter, project, project_all};

#[test]
fn test_one_row_per_group() {
    let views = project_all(&binding_file(), &keyboard_map(), &action_mappings());
    assert_eq!(views.len(), FIXTURE_GROUP_COUNT);
    assert_eq!(views[0].bind_ed_variable, "edYawAxisRaw");
    assert_eq!(views.last().unwrap().bind_ed_variable, "edLandingGearToggle");
}

#[test]
fn test_keyboard_map_rows() {
    let views = project_all(&binding_file(), &keyboard_map(), &action_mappings());

    let yaw = row(&views, "YawLeftButton");
    assert_eq!(yaw.area, "Ship");
    assert_eq!(yaw.action, "Yaw Left");
    assert_eq!((yaw.primary_device.as_str(), yaw.primary_key.as_str()), ("Keyboard", "A"));
    assert_eq!(yaw.secondary_device.as_deref(), Some("{NoDevice}"));
    assert_eq!(yaw.secondary_key.as_deref(), Some(""));

    let boost = row(&views, "UseBoostJuice");
    assert_eq!(boost.action, "Engine Boost");
    assert_eq!(boost.category, "Flight Miscellaneous");
    assert_eq!(boost.primary_key, "Tab");
    assert_eq!(boost.secondary_device.as_deref(), Some("T16000M"));
    assert_eq!(boost.secondary_key.as_deref(), Some("Joy_3"));

    let axis = row(&views, "YawAxisRaw");
    assert_eq!(axis.primary_device, "T16000M");
    assert_eq!(axis.primary_key, "Joy_XAxis");
    assert!(axis.secondary_device.is_none());
    assert!(axis.secondary_key.is_none());
}

#[test]
fn test_stick_map_rows() {
    let views = project_all(&binding_file(), &stick_map(), &action_mappings());

    let fire = row(&views, "PrimaryFire");
    assert_eq!(fire.primary_device, "T.16000M Stick");
    assert_eq!(fire.primary_key, "Trigger");
    assert_eq!(fire.secondary_device.as_deref(), Some("Mouse"));
    assert_eq!(fire.secondary_key.as_deref(), Some("Mouse_1"));

    let throttle = row(&views, "ThrottleAxis");
    assert_eq!(throttle.primary_key, "Throttle Wheel");
    assert_eq!(throttle.action, "Throttle Axis");
}

#[test]
fn test_unmapped_groups_fall_back() {
    let views = project_all(&binding_file(), &keyboard_map(), &action_mappings());

    let cycle = row(&views, "CycleNextTarget");
    assert_eq!(cycle.action, "CycleNextTarget");
    assert_eq!(cycle.area, "");
    assert_eq!(cycle.category, "");
    assert_eq!(cycle.primary_key, "");

    let gear = row(&views, "LandingGearToggle");
    assert_eq!(gear.primary_device, "{NoDevice}");
    assert_eq!(gear.primary_key, "");
    assert!(gear.secondary_key.is_none());
}

#[test]
fn test_empty_tables_degrade() {
    let views = project_all(&binding_file(), &DeviceMap::default(), &[]);
    assert_eq!(views.len(), FIXTURE_GROUP_COUNT);
    for view in &views {
        assert_eq!(view.area, "");
        assert_eq!(view.action, view.bind_ed_variable.trim_start_matches("ed"));
    }
    assert_eq!(row(&views, "YawLeftButton").primary_key, "Key_A");
}

#[test]
fn test_projection_idempotent() {
    let (file, map, actions) = (binding_file(), keyboard_map(), action_mappings());
    for group in file.groups() {
        assert_eq!(project(group, &map, &actions), project(group, &map, &actions));
    }
}

#[test]
fn test_switching_device_map_changes_labels_only() {
    let (file, actions) = (binding_file(), action_mappings());
    let keyboard = project_all(&file, &keyboard_map(), &actions);
    let stick = project_all(&file, &stick_map(), &actions);
    assert_eq!(keyboard.len(), stick.len());
    for (k, s) in keyboard.iter().zip(&stick) {
        assert_eq!(k.action, s.action);
        assert_eq!(k.bind_ed_variable, s.bind_ed_variable);
    }
    assert_ne!(row(&keyboard, "PrimaryFire").primary_key, row(&stick, "PrimaryFire").primary_key);
}

#[test]
fn test_filter_and_export() {
    let views = project_all(&binding_file(), &keyboard_map(), &action_mappings());
    let yaw: Vec<_> = filter::apply(&views, "YAW")
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(yaw.len(), 3);

    let csv = to_csv(&yaw).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("Ship,Flight Rotation,Yaw Left,Keyboard,A,{NoDevice},,edYawLeftButton"));

    let json = ExportFormat::Json.render(&yaw).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 3);
    assert!(parsed[0]["SecondaryKey"].is_null());
}
