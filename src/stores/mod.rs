//! Storage collaborators used by the settings manager
//!
//! Each trait is the full contract the manager relies on. [`fs`] provides
//! implementations backed by JSON files under one root directory and
//! [`memory`] provides in-process ones.

use anyhow::Result;
use std::collections::BTreeSet;

use crate::layout::{AppDescriptor, Item, Page};

pub mod fs;
pub mod memory;

/// Named blobs plus a simple namespaced flag area
pub trait ConfigStore {
    /// `None` when no blob with that name has been written
    fn read_blob(&self, name: &str) -> Result<Option<Vec<u8>>>;

    fn write_blob(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    fn read_flag(&self, namespace: &str, key: &str) -> Result<Option<bool>>;

    fn write_flag(&mut self, namespace: &str, key: &str, value: bool) -> Result<()>;
}

/// Desktop pages and dock, always read and written wholesale
pub trait LayoutStore {
    /// Missing data reads as an empty list
    fn desktop_pages(&self) -> Result<Vec<Page>>;

    fn dock(&self) -> Result<Vec<Item>>;

    fn set_desktop_pages(&mut self, pages: &[Page]) -> Result<()>;

    fn set_dock(&mut self, items: &[Item]) -> Result<()>;
}

/// Installed applications, in a stable order
pub trait AppCatalog {
    fn list_apps(&self) -> Result<Vec<AppDescriptor>>;
}

/// Rendered shortcut icons keyed by icon-cache id
pub trait IconCache {
    fn known_ids(&self) -> Result<BTreeSet<String>>;

    fn delete(&mut self, ids: &BTreeSet<String>) -> Result<()>;
}
