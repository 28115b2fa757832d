//! Binding node model
//!
//! Every element of a `.binds` document becomes a [`BindingNode`]: elements
//! with child elements become a [`BindingGroup`], childless ones a
//! [`DeviceBinding`] leaf.
//!
//! A group's children are built from *all* of its descendant elements, not
//! just the direct ones. Given
//!
//! ```xml
//! <CycleNextTarget>
//!     <Primary Device="Keyboard" Key="Key_T">
//!         <Modifier Device="Keyboard" Key="Key_LeftShift" />
//!     </Primary>
//!     <Secondary Device="{NoDevice}" Key="" />
//! </CycleNextTarget>
//! ```
//!
//! the group `CycleNextTarget` holds three children: a `Primary` group
//! (containing the modifier), the `Modifier` leaf itself, and the
//! `Secondary` leaf. Note that the `Primary` here is a group, not a leaf.

use crate::bindings::document::{Element, XmlNode};

/// Attribute carrying the device identifier on a leaf element
pub const DEVICE_ATTRIBUTE: &str = "Device";

/// Attribute carrying the control identifier on a leaf element
pub const KEY_ATTRIBUTE: &str = "Key";

/// One parsed binding element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingNode {
    /// Childless element with optional device/key attributes
    Leaf(DeviceBinding),
    /// Element with at least one child element
    Group(BindingGroup),
}

/// A device/control assignment (`<Primary Device=".." Key=".." />`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceBinding {
    pub name: String,
    /// `None` when the attribute is missing; `{NoDevice}` and friends are kept verbatim
    pub device: Option<String>,
    pub key: Option<String>,
}

/// A named collection of bindings, usually one game action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingGroup {
    pub name: String,
    pub children: Vec<BindingNode>,
}

impl BindingNode {
    /// Build a node from an element. Always succeeds.
    pub fn from_element(element: &Element) -> Self {
        if element.has_child_elements() {
            BindingNode::Group(BindingGroup {
                name: element.name.clone(),
                children: element.descendants().map(BindingNode::from_element).collect(),
            })
        } else {
            BindingNode::Leaf(DeviceBinding {
                name: element.name.clone(),
                device: element.attribute(DEVICE_ATTRIBUTE).map(str::to_string),
                key: element.attribute(KEY_ATTRIBUTE).map(str::to_string),
            })
        }
    }

    pub fn name(&self) -> &str {
        match self {
            BindingNode::Leaf(leaf) => &leaf.name,
            BindingNode::Group(group) => &group.name,
        }
    }

    pub fn as_group(&self) -> Option<&BindingGroup> {
        match self {
            BindingNode::Group(group) => Some(group),
            BindingNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&DeviceBinding> {
        match self {
            BindingNode::Leaf(leaf) => Some(leaf),
            BindingNode::Group(_) => None,
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        match self {
            BindingNode::Leaf(_) => 1,
            BindingNode::Group(group) => {
                1 + group.children.iter().map(BindingNode::node_count).sum::<usize>()
            }
        }
    }
}

impl BindingGroup {
    /// Direct leaf children, in document order
    pub fn leaves(&self) -> impl Iterator<Item = &DeviceBinding> {
        self.children.iter().filter_map(BindingNode::as_leaf)
    }

    /// First direct leaf whose name is one of `names`
    pub fn first_leaf_named(&self, names: &[&str]) -> Option<&DeviceBinding> {
        self.leaves().find(|leaf| names.contains(&leaf.name.as_str()))
    }
}

/// Binding node factory.
///
/// Returns `None` for content that is not an element (text between tags);
/// every element yields a node.
pub fn make_binding(node: &XmlNode) -> Option<BindingNode> {
    match node {
        XmlNode::Element(element) => Some(BindingNode::from_element(element)),
        XmlNode::Text(_) => None,
    }
}
