//! Icon-cache reachability sweep
//!
//! Marks every icon-cache id referenced by a shortcut on the desktop or in
//! the dock (directly or as a group member), then deletes every cached id
//! that was not marked.

use anyhow::Result;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::layout::{Item, Page};
use crate::stores::IconCache;

/// Icon-cache ids reachable from the given layout
pub fn reachable_icon_ids(pages: &[Page], dock: &[Item]) -> BTreeSet<String> {
    let mut reachable = BTreeSet::new();
    let items = pages.iter().flat_map(|page| page.items.iter()).chain(dock);

    for item in items {
        match item {
            Item::Shortcut(shortcut) => {
                if let Some(id) = &shortcut.icon_cache_id {
                    reachable.insert(id.clone());
                }
            }
            Item::Group(group) => {
                reachable.extend(
                    group
                        .items
                        .iter()
                        .filter_map(|child| child.icon_cache_id())
                        .map(str::to_string),
                );
            }
            Item::AppShortcut(_) => {}
        }
    }

    reachable
}

/// Delete every cached icon not in `reachable`; returns the deleted ids
pub fn sweep_unreachable(
    cache: &mut impl IconCache,
    reachable: &BTreeSet<String>,
) -> Result<BTreeSet<String>> {
    let known = cache.known_ids()?;
    let unreachable: BTreeSet<String> = known.difference(reachable).cloned().collect();

    if unreachable.is_empty() {
        debug!(known = known.len(), "Icon cache has no unreachable entries");
        return Ok(unreachable);
    }

    cache.delete(&unreachable)?;
    info!(
        known = known.len(),
        reachable = reachable.len(),
        deleted = unreachable.len(),
        "Swept unused icons from cache"
    );
    Ok(unreachable)
}
