//! Desktop and dock layout model
//!
//! The desktop is an ordered list of [`Page`]s; the dock is a single ordered
//! list of [`Item`]s. Groups hold [`GroupChild`]ren, which have no group
//! variant, so groups never nest.

use serde::{Deserialize, Serialize};

/// An installed application as reported by the app catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDescriptor {
    pub package_name: String,
    pub class_name: String,
    #[serde(default)]
    pub label: String,
}

impl AppDescriptor {
    pub fn new(package_name: &str, class_name: &str, label: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            class_name: class_name.to_string(),
            label: label.to_string(),
        }
    }
}

/// Launches an installed application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppShortcut {
    pub x: i32,
    pub y: i32,
    pub app: AppDescriptor,
}

/// Launches an external intent/action, optionally with a cached icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub label: String,
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_cache_id: Option<String>,
}

/// Member of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GroupChild {
    AppShortcut(AppShortcut),
    Shortcut(Shortcut),
}

impl GroupChild {
    pub fn icon_cache_id(&self) -> Option<&str> {
        match self {
            GroupChild::Shortcut(shortcut) => shortcut.icon_cache_id.as_deref(),
            GroupChild::AppShortcut(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub items: Vec<GroupChild>,
}

/// A placeable unit on a page or in the dock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    AppShortcut(AppShortcut),
    Shortcut(Shortcut),
    Group(Group),
}

impl Item {
    pub fn app(app: AppDescriptor, x: i32, y: i32) -> Self {
        Item::AppShortcut(AppShortcut { x, y, app })
    }

    pub fn shortcut(intent: &str, icon_cache_id: Option<&str>, x: i32, y: i32) -> Self {
        Item::Shortcut(Shortcut {
            x,
            y,
            label: String::new(),
            intent: intent.to_string(),
            icon_cache_id: icon_cache_id.map(str::to_string),
        })
    }

    pub fn group(children: Vec<GroupChild>, x: i32, y: i32) -> Self {
        Item::Group(Group {
            x,
            y,
            label: String::new(),
            items: children,
        })
    }

    /// Grid coordinates (x, y)
    pub fn position(&self) -> (i32, i32) {
        match self {
            Item::AppShortcut(item) => (item.x, item.y),
            Item::Shortcut(item) => (item.x, item.y),
            Item::Group(item) => (item.x, item.y),
        }
    }
}

/// One grid-worth of items on the desktop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    pub items: Vec<Item>,
}

impl Page {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose coordinates fall outside a `grid_x` x `grid_y` grid
    pub fn out_of_bounds(&self, grid_x: i32, grid_y: i32) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| {
                let (x, y) = item.position();
                !(0..grid_x).contains(&x) || !(0..grid_y).contains(&y)
            })
            .collect()
    }
}
