//! In-process stores
//!
//! Nothing here survives the process. Used to run the manager against a
//! throwaway state and as the base for test doubles.

use anyhow::Result;
use std::collections::{BTreeSet, HashMap};

use super::{AppCatalog, ConfigStore, IconCache, LayoutStore};
use crate::layout::{AppDescriptor, Item, Page};

#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    pub blobs: HashMap<String, Vec<u8>>,
    pub flags: HashMap<(String, String), bool>,
}

impl ConfigStore for MemoryConfigStore {
    fn read_blob(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.get(name).cloned())
    }

    fn write_blob(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.blobs.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn read_flag(&self, namespace: &str, key: &str) -> Result<Option<bool>> {
        Ok(self
            .flags
            .get(&(namespace.to_string(), key.to_string()))
            .copied())
    }

    fn write_flag(&mut self, namespace: &str, key: &str, value: bool) -> Result<()> {
        self.flags
            .insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    pub pages: Vec<Page>,
    pub dock: Vec<Item>,
}

impl LayoutStore for MemoryLayoutStore {
    fn desktop_pages(&self) -> Result<Vec<Page>> {
        Ok(self.pages.clone())
    }

    fn dock(&self) -> Result<Vec<Item>> {
        Ok(self.dock.clone())
    }

    fn set_desktop_pages(&mut self, pages: &[Page]) -> Result<()> {
        self.pages = pages.to_vec();
        Ok(())
    }

    fn set_dock(&mut self, items: &[Item]) -> Result<()> {
        self.dock = items.to_vec();
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAppCatalog {
    pub apps: Vec<AppDescriptor>,
}

impl MemoryAppCatalog {
    pub fn new(apps: Vec<AppDescriptor>) -> Self {
        Self { apps }
    }
}

impl AppCatalog for MemoryAppCatalog {
    fn list_apps(&self) -> Result<Vec<AppDescriptor>> {
        Ok(self.apps.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryIconCache {
    pub ids: BTreeSet<String>,
}

impl MemoryIconCache {
    pub fn with_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            ids: ids.into_iter().map(str::to_string).collect(),
        }
    }
}

impl IconCache for MemoryIconCache {
    fn known_ids(&self) -> Result<BTreeSet<String>> {
        Ok(self.ids.clone())
    }

    fn delete(&mut self, ids: &BTreeSet<String>) -> Result<()> {
        self.ids.retain(|id| !ids.contains(id));
        Ok(())
    }
}
