#![forbid(unsafe_code)]
//! Launcher settings and layout persistence
//!
//! [`SettingsManager`] loads the launcher preference record and the desktop
//! and dock layout, persists them, keeps the shortcut icon cache free of
//! unreferenced entries, and builds a default desktop when switching to the
//! show-all-apps mode.

pub mod cli;
pub mod config;
pub mod constants;
pub mod default_layout;
pub mod icon_sweep;
pub mod layout;
pub mod manager;
pub mod stores;

pub use config::{DesktopMode, Gesture, PreferenceRecord};
pub use layout::{AppDescriptor, GroupChild, Item, Page};
pub use manager::SettingsManager;
