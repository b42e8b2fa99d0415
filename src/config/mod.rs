//! Launcher configuration
//!
//! - **preferences**: the flat [`PreferenceRecord`] persisted as a JSON blob

pub mod preferences;

pub use preferences::{DesktopMode, DrawerMode, Gesture, PreferenceEnum, PreferenceRecord, Theme};
