//! Device control label maps
//!
//! Each file under `DeviceMappings/` describes one controller profile:
//!
//! ```json
//! {
//!   "Name": "Thrustmaster T.16000M",
//!   "Controls": [
//!     { "DeviceId": "T16000M", "ControlValue": "Joy_1", "DeviceName": "Stick", "ControlLabel": "Trigger" }
//!   ]
//! }
//! ```

use crate::bindings::DeviceBinding;
use crate::error::{MappingError, MappingResult};
use crate::mappings::{eq_ignore_case, null_as_default, read_json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Human-readable label for one device control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeviceControlMap {
    /// Device identifier as written in `.binds` files
    #[serde(deserialize_with = "null_as_default")]
    pub device_id: String,

    /// Control identifier as written in `.binds` files
    #[serde(deserialize_with = "null_as_default")]
    pub control_value: String,

    #[serde(deserialize_with = "null_as_default")]
    pub device_name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub control_label: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct DeviceMapFile {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    controls: Vec<DeviceControlMap>,
}

/// Field names of both record shapes; keys are matched against these ignoring case
const DEVICE_FIELDS: [&str; 6] = [
    "Name",
    "Controls",
    "DeviceId",
    "ControlValue",
    "DeviceName",
    "ControlLabel",
];

type ControlKey = (String, String);

fn control_key(device: &str, control: &str) -> ControlKey {
    (device.to_lowercase(), control.to_lowercase())
}

/// A loaded controller profile
#[derive(Debug, Clone, Default)]
pub struct DeviceMap {
    name: String,
    controls: Vec<DeviceControlMap>,
    /// Case-folded (device, control) -> index into `controls`; earliest entry wins
    index: HashMap<ControlKey, usize>,
}

impl DeviceMap {
    pub fn new(name: impl Into<String>, controls: Vec<DeviceControlMap>) -> Self {
        let mut index = HashMap::with_capacity(controls.len());
        for (i, control) in controls.iter().enumerate() {
            index
                .entry(control_key(&control.device_id, &control.control_value))
                .or_insert(i);
        }
        Self {
            name: name.into(),
            controls,
            index,
        }
    }

    /// Load a device map file.
    ///
    /// A `null` document loads as an empty, unnamed map.
    ///
    /// # Errors
    /// Returns `MappingError::Io` if the file cannot be read and
    /// `MappingError::Format` if it does not match the device map layout.
    pub fn open(path: impl AsRef<Path>) -> MappingResult<Self> {
        let path = path.as_ref();
        let file: DeviceMapFile = read_json(path, &DEVICE_FIELDS)?;
        let map = Self::new(file.name, file.controls);
        debug!(
            path = %path.display(),
            name = %map.name,
            controls = map.controls.len(),
            "loaded device map"
        );
        Ok(map)
    }

    /// Display name of the profile
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in file order
    pub fn controls(&self) -> &[DeviceControlMap] {
        &self.controls
    }

    /// Look up a control label. Both ids are compared ignoring case;
    /// `None` if either is absent or nothing matches.
    pub fn find_control_map(
        &self,
        device: Option<&str>,
        control: Option<&str>,
    ) -> Option<&DeviceControlMap> {
        let (device, control) = (device?, control?);
        self.index
            .get(&control_key(device, control))
            .and_then(|&i| self.controls.get(i))
    }

    /// Look up the label for a leaf binding
    pub fn resolve(&self, binding: &DeviceBinding) -> Option<&DeviceControlMap> {
        self.find_control_map(binding.device.as_deref(), binding.key.as_deref())
    }
}

/// Load every `*.json` device map in `dir`, ordered by file name.
///
/// Files that fail to load are logged and skipped.
///
/// # Errors
/// Returns `MappingError::Io` if the directory itself cannot be read.
pub fn load_device_maps(dir: impl AsRef<Path>) -> MappingResult<Vec<DeviceMap>> {
    let dir = dir.as_ref();
    let io_err = |source: std::io::Error| MappingError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut maps = Vec::with_capacity(paths.len());
    for path in paths {
        match DeviceMap::open(&path) {
            Ok(map) => maps.push(map),
            Err(e) => warn!(error = %e, "skipping device map"),
        }
    }
    Ok(maps)
}

/// Pick the active device map: the one named `name` (ignoring case),
/// otherwise the first one.
pub fn select_device_map<'a>(maps: &'a [DeviceMap], name: Option<&str>) -> Option<&'a DeviceMap> {
    let Some(name) = name else {
        return maps.first();
    };
    let found = maps.iter().find(|m| eq_ignore_case(m.name(), name));
    if found.is_none() {
        warn!(requested = name, "device map not found, using the first available");
    }
    found.or_else(|| maps.first())
}
