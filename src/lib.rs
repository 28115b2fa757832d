//! edbinds - Flatten Elite Dangerous key-binding files into a readable table
//!
//! edbinds reads the game's exported `.binds` XML, joins every binding group
//! against an action metadata table and a device control label map, and
//! produces one flat row per action with its primary and secondary inputs.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`bindings`]: `.binds` parsing and the binding node tree
//! - [`mappings`]: action metadata and device label tables
//! - [`view`]: the join producing [`KeyBindingView`] rows
//! - [`filter`]: text search over rows
//! - [`export`]: CSV / JSON serialization
//! - [`config`]: user settings
//! - [`error`]: Error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use edbinds::{ActionMapping, BindingFile, DeviceMap, project_all};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let file = BindingFile::open("Custom.4.2.binds")?;
//! let actions = ActionMapping::open("ActionMappings.json")?;
//! let device_map = DeviceMap::open("DeviceMappings/Keyboard.json")?;
//!
//! for view in project_all(&file, &device_map, &actions) {
//!     println!("{}: {} {}", view.action, view.primary_device, view.primary_key);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bindings;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod logging;
pub mod mappings;
pub mod table;
pub mod view;

pub use bindings::{BindingFile, BindingGroup, BindingNode, DeviceBinding, make_binding};
pub use error::{
    BindingError, ConfigError, EdBindsError, ExportError, MappingError, Result,
};
pub use mappings::{ActionMapping, DeviceControlMap, DeviceMap, load_device_maps};
pub use view::{KeyBindingView, project, project_all};
