//! Device map and action mapping loading

use crate::common::{action_mappings, fixture, keyboard_map, stick_map};
use edbinds::mappings::select_device_map;
use edbinds::{ActionMapping, DeviceMap, MappingError, load_device_maps};

#[test]
fn test_every_listed_control_resolves() {
    for map in [keyboard_map(), stick_map()] {
        assert!(!map.controls().is_empty());
        for control in map.controls() {
            let found = map
                .find_control_map(Some(control.device_id.as_str()), Some(control.control_value.as_str()))
                .unwrap_or_else(|| panic!("{} / {}", control.device_id, control.control_value));
            assert!(found.device_id.eq_ignore_ascii_case(&control.device_id));
        }
    }
}

#[test]
fn test_directory_skips_broken_files() {
    let maps = load_device_maps(fixture("DeviceMappings")).unwrap();
    let names: Vec<&str> = maps.iter().map(DeviceMap::name).collect();
    assert_eq!(names, vec!["Keyboard", "Thrustmaster T.16000M"]);
}

#[test]
fn test_select_from_directory() {
    let maps = load_device_maps(fixture("DeviceMappings")).unwrap();
    let active = select_device_map(&maps, Some("thrustmaster t.16000m")).unwrap();
    assert_eq!(active.name(), "Thrustmaster T.16000M");
}

#[test]
fn test_missing_directory_is_io_error() {
    let err = load_device_maps(fixture("NoSuchDir")).unwrap_err();
    assert!(matches!(err, MappingError::Io { .. }));
}

#[test]
fn test_broken_map_is_format_error() {
    let err = DeviceMap::open(fixture("DeviceMappings/Broken.json")).unwrap_err();
    assert!(matches!(err, MappingError::Format { .. }));
}

#[test]
fn test_action_mappings_load() {
    let mappings = action_mappings();
    assert_eq!(mappings.len(), 8);
    let boost = ActionMapping::find(&mappings, "UseBoostJuice").unwrap();
    assert_eq!(boost.action.as_deref(), Some("Engine Boost"));
}

#[test]
fn test_null_action_table_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ActionMappings.json");
    std::fs::write(&path, "null").unwrap();
    assert!(ActionMapping::open(&path).unwrap().is_empty());
}

#[test]
fn test_missing_action_table_is_io_error() {
    let err = ActionMapping::open(fixture("Missing.json")).unwrap_err();
    assert!(matches!(err, MappingError::Io { .. }));
}
