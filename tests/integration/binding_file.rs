//! Binding file loading against the fixture export

use crate::common::{
    FIXTURE_BINDING_COUNT, FIXTURE_GROUP_COUNT, FIXTURE_NODE_COUNT, binding_file, fixture,
};
use edbinds::{BindingError, BindingFile, BindingNode};

#[test]
fn test_fixture_layout_and_count() {
    let file = binding_file();
    assert_eq!(file.keyboard_layout, "en-US");
    assert_eq!(file.bindings.len(), FIXTURE_BINDING_COUNT);
    assert_eq!(file.groups().count(), FIXTURE_GROUP_COUNT);
    assert_eq!(file.display_name(), "Custom.binds");
}

#[test]
fn test_fixture_total_nodes() {
    let file = binding_file();
    let total: usize = file.bindings.iter().map(BindingNode::node_count).sum();
    assert_eq!(total, FIXTURE_NODE_COUNT);
}

#[test]
fn test_fixture_document_order() {
    let file = binding_file();
    let names: Vec<&str> = file.bindings.iter().map(BindingNode::name).collect();
    assert_eq!(names.first(), Some(&"KeyboardLayout"));
    assert_eq!(names.last(), Some(&"HeadLookReset"));
    assert!(file.bindings.last().unwrap().as_leaf().is_some());
}

#[test]
fn test_fixture_modifier_flattened() {
    let file = binding_file();
    let group = file
        .groups()
        .find(|g| g.name == "CycleNextTarget")
        .unwrap();
    let names: Vec<&str> = group.children.iter().map(BindingNode::name).collect();
    assert_eq!(names, vec!["Primary", "Modifier", "Secondary"]);
    assert!(group.children[0].as_group().is_some());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = BindingFile::open(fixture("DoesNotExist.binds")).unwrap_err();
    assert!(matches!(err, BindingError::Io { .. }));
}

#[test]
fn test_non_xml_file_is_format_error() {
    let err = BindingFile::open(fixture("ActionMappings.json")).unwrap_err();
    assert!(matches!(err, BindingError::Format { .. }));
}

#[test]
fn test_invalid_utf8_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.binds");
    std::fs::write(&path, [0x3c, 0x52, 0xff, 0xfe, 0x3e]).unwrap();
    let err = BindingFile::open(&path).unwrap_err();
    assert!(matches!(err, BindingError::Format { .. }));
}
