//! File-backed stores
//!
//! Everything lives under one root directory:
//! - `<root>/<blob name>` preference blobs
//! - `<root>/<namespace>.prefs.json` flag areas
//! - `<root>/layout/desktop.json` and `<root>/layout/dock.json`
//! - `<root>/icons/<id>.png` cached shortcut icons
//! - `<root>/apps.json` installed applications

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{AppCatalog, ConfigStore, IconCache, LayoutStore};
use crate::constants::storage;
use crate::layout::{AppDescriptor, Item, Page};

/// `<config dir>/launcher-settings`, or `./launcher-settings` without a config dir
pub fn default_root() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(storage::APP_DIR);
    path
}

/// Read a file, mapping "not found" to `None`
fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", path)),
    }
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match read_optional(path)? {
        Some(bytes) => serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse JSON from {:?}", path)),
        None => Ok(T::default()),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {:?}", path))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)
        .with_context(|| format!("Failed to serialize JSON for {:?}", path))?;
    write_file(path, &json)
}

// ==============================================================================
// Config
// ==============================================================================

#[derive(Debug, Clone)]
pub struct FsConfigStore {
    root: PathBuf,
}

impl FsConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn flags_path(&self, namespace: &str) -> PathBuf {
        self.root.join(format!("{namespace}.prefs.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn read_blob(&self, name: &str) -> Result<Option<Vec<u8>>> {
        read_optional(&self.root.join(name))
    }

    fn write_blob(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.root.join(name);
        write_file(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Wrote blob");
        Ok(())
    }

    fn read_flag(&self, namespace: &str, key: &str) -> Result<Option<bool>> {
        let flags: BTreeMap<String, bool> = read_json_or_default(&self.flags_path(namespace))?;
        Ok(flags.get(key).copied())
    }

    fn write_flag(&mut self, namespace: &str, key: &str, value: bool) -> Result<()> {
        let path = self.flags_path(namespace);
        let mut flags: BTreeMap<String, bool> = read_json_or_default(&path)?;
        flags.insert(key.to_string(), value);
        write_json(&path, &flags)
    }
}

// ==============================================================================
// Layout
// ==============================================================================

#[derive(Debug, Clone)]
pub struct FsLayoutStore {
    dir: PathBuf,
}

impl FsLayoutStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join(storage::LAYOUT_DIR),
        }
    }
}

impl LayoutStore for FsLayoutStore {
    fn desktop_pages(&self) -> Result<Vec<Page>> {
        read_json_or_default(&self.dir.join(storage::DESKTOP_FILE))
    }

    fn dock(&self) -> Result<Vec<Item>> {
        read_json_or_default(&self.dir.join(storage::DOCK_FILE))
    }

    fn set_desktop_pages(&mut self, pages: &[Page]) -> Result<()> {
        write_json(&self.dir.join(storage::DESKTOP_FILE), pages)
    }

    fn set_dock(&mut self, items: &[Item]) -> Result<()> {
        write_json(&self.dir.join(storage::DOCK_FILE), items)
    }
}

// ==============================================================================
// Apps
// ==============================================================================

/// Reads the ordered app list from a JSON array on disk
#[derive(Debug, Clone)]
pub struct FsAppCatalog {
    path: PathBuf,
}

impl FsAppCatalog {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(storage::APPS_FILE),
        }
    }
}

impl AppCatalog for FsAppCatalog {
    fn list_apps(&self) -> Result<Vec<AppDescriptor>> {
        read_json_or_default(&self.path)
    }
}

// ==============================================================================
// Icons
// ==============================================================================

/// One `<id>.png` file per cached icon
#[derive(Debug, Clone)]
pub struct FsIconCache {
    dir: PathBuf,
}

impl FsIconCache {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join(storage::ICON_DIR),
        }
    }

    pub fn icon_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{}", storage::ICON_EXTENSION))
    }
}

impl IconCache for FsIconCache {
    fn known_ids(&self) -> Result<BTreeSet<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to list icon cache {:?}", self.dir));
            }
        };

        let mut ids = BTreeSet::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(storage::ICON_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.insert(stem.to_string());
            }
        }
        Ok(ids)
    }

    fn delete(&mut self, ids: &BTreeSet<String>) -> Result<()> {
        for id in ids {
            let path = self.icon_path(id);
            match fs::remove_file(&path) {
                Ok(()) => info!(icon = %id, "Deleted unused icon"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to delete icon {:?}", path));
                }
            }
        }
        Ok(())
    }
}
