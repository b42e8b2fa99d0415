//! Application-wide constants
//!
//! File names, namespaces and default preference values live here so the
//! persisted format has a single source of truth.

/// Storage names and on-disk layout
pub mod storage {
    /// Name of the preference blob inside the config store
    pub const SETTINGS_BLOB: &str = "generalSettings.json";

    /// Namespace of the simple preference area
    pub const PREFS_NAMESPACE: &str = "LauncherSettings";

    /// Marker flag written into [`PREFS_NAMESPACE`] once settings have been loaded
    pub const INITIALIZED_FLAG: &str = "initialized";

    /// Directory name used under the platform config dir
    pub const APP_DIR: &str = "launcher-settings";

    /// Subdirectory holding the desktop and dock layout
    pub const LAYOUT_DIR: &str = "layout";

    pub const DESKTOP_FILE: &str = "desktop.json";
    pub const DOCK_FILE: &str = "dock.json";

    /// Subdirectory holding rendered shortcut icons
    pub const ICON_DIR: &str = "icons";

    /// Extension of cached icon bitmaps
    pub const ICON_EXTENSION: &str = "png";

    /// Ordered list of installed applications
    pub const APPS_FILE: &str = "apps.json";
}

/// ARGB colors, stored as signed 32-bit integers to match existing blobs
pub mod colors {
    pub const TRANSPARENT: i32 = 0;
    pub const WHITE: i32 = 0xFFFF_FFFF_u32 as i32;
    pub const DARK_GRAY: i32 = 0xFF44_4444_u32 as i32;
}

/// Default preference values
pub mod defaults {
    pub const ICON_SIZE: i32 = 58;

    pub const DESKTOP_GRID_X: i32 = 4;
    pub const DESKTOP_GRID_Y: i32 = 4;

    pub const DRAWER_GRID_X: i32 = 4;
    pub const DRAWER_GRID_Y: i32 = 5;

    /// Landscape drawer grid
    pub const DRAWER_GRID_X_LANDSCAPE: i32 = 5;
    pub const DRAWER_GRID_Y_LANDSCAPE: i32 = 3;

    pub const DOCK_GRID_X: i32 = 5;
}
