//! Settings and layout persistence manager
//!
//! Owns the loaded [`PreferenceRecord`] and the in-memory desktop pages and
//! dock. Edits stay in memory until [`SettingsManager::save`]; the icon-cache
//! sweep only ever runs right after a successful save, so the set of
//! reachable icons it computes always matches what is on disk.
//!
//! The manager is not synchronized. Callers sharing it across threads must
//! wrap the whole manager in one lock, since a mode switch is several steps
//! and a partial read would see a mode and layout that do not belong together.

use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;
use tracing::{error, info, warn};

use crate::config::{DesktopMode, Gesture, PreferenceEnum, PreferenceRecord};
use crate::constants::storage;
use crate::default_layout::generate_default_pages;
use crate::icon_sweep::{reachable_icon_ids, sweep_unreachable};
use crate::layout::{Item, Page};
use crate::stores::{AppCatalog, ConfigStore, IconCache, LayoutStore};

pub struct SettingsManager<C, L, A, I> {
    config: C,
    layout: L,
    apps: A,
    icons: I,

    /// `None` until the first `load()`
    preferences: Option<PreferenceRecord>,
    desktop: Vec<Page>,
    dock: Vec<Item>,
}

impl<C, L, A, I> SettingsManager<C, L, A, I>
where
    C: ConfigStore,
    L: LayoutStore,
    A: AppCatalog,
    I: IconCache,
{
    pub fn new(config: C, layout: L, apps: A, icons: I) -> Self {
        Self {
            config,
            layout,
            apps,
            icons,
            preferences: None,
            desktop: Vec::new(),
            dock: Vec::new(),
        }
    }

    // ==========================================================================
    // Load / save
    // ==========================================================================

    /// Load preferences and layout.
    ///
    /// Returns `Ok(false)` when a stored blob could not be decoded; defaults
    /// are in effect in that case. A missing blob also yields defaults but
    /// returns `Ok(true)`.
    pub fn load(&mut self) -> Result<bool> {
        let mut decoded_ok = true;
        let preferences = match self.config.read_blob(storage::SETTINGS_BLOB)? {
            None => {
                info!(blob = storage::SETTINGS_BLOB, "No saved settings, using defaults");
                PreferenceRecord::default()
            }
            Some(raw) => match PreferenceRecord::decode(&raw) {
                Ok(preferences) => preferences,
                Err(e) => {
                    error!(blob = storage::SETTINGS_BLOB, error = %e, "Failed to decode settings, using defaults");
                    decoded_ok = false;
                    PreferenceRecord::default()
                }
            },
        };

        // Nothing is committed until both layout reads succeed
        let (desktop, dock) = self.read_layout(&preferences)?;
        self.preferences = Some(preferences);
        self.desktop = desktop;
        self.dock = dock;

        if let Err(e) = self
            .config
            .write_flag(storage::PREFS_NAMESPACE, storage::INITIALIZED_FLAG, true)
        {
            warn!(namespace = storage::PREFS_NAMESPACE, error = %e, "Failed to mark preference namespace");
        }

        info!(
            pages = self.desktop.len(),
            dock = self.dock.len(),
            decoded_ok,
            "Loaded launcher settings"
        );
        Ok(decoded_ok)
    }

    /// Persist layout, then preferences.
    ///
    /// Returns `Ok(None)` without writing anything when nothing has been
    /// loaded yet, otherwise the encoded preference blob.
    pub fn save(&mut self) -> Result<Option<String>> {
        let Some(preferences) = &self.preferences else {
            warn!("Save requested before settings were loaded, ignoring");
            return Ok(None);
        };

        self.layout.set_desktop_pages(&self.desktop)?;
        self.layout.set_dock(&self.dock)?;

        let encoded = preferences
            .encode()
            .context("Failed to serialize settings to JSON")?;
        self.config
            .write_blob(storage::SETTINGS_BLOB, encoded.as_bytes())?;

        info!(pages = self.desktop.len(), dock = self.dock.len(), "Saved launcher settings");
        Ok(Some(encoded))
    }

    /// Save, then delete cached icons no shortcut refers to.
    ///
    /// Returns the deleted ids. Nothing is swept when the save was refused.
    pub fn commit_and_sweep(&mut self) -> Result<BTreeSet<String>> {
        if self.save()?.is_none() {
            return Ok(BTreeSet::new());
        }

        let reachable = reachable_icon_ids(&self.desktop, &self.dock);
        sweep_unreachable(&mut self.icons, &reachable)
    }

    /// Read desktop pages and dock without touching in-memory state
    fn read_layout(&self, preferences: &PreferenceRecord) -> Result<(Vec<Page>, Vec<Item>)> {
        let desktop = self.layout.desktop_pages()?;
        let dock = self.layout.dock()?;

        for (index, page) in desktop.iter().enumerate() {
            for item in page.out_of_bounds(preferences.desktop_grid_x, preferences.desktop_grid_y) {
                warn!(
                    page = index,
                    position = ?item.position(),
                    grid_x = preferences.desktop_grid_x,
                    grid_y = preferences.desktop_grid_y,
                    "Item outside desktop grid"
                );
            }
        }
        Ok((desktop, dock))
    }

    // ==========================================================================
    // Mode transitions
    // ==========================================================================

    /// Switch the desktop mode.
    ///
    /// Saves and sweeps against the current layout, records the new mode,
    /// reloads the layout from storage and, when switching to
    /// [`DesktopMode::ShowAllApps`] with no desktop pages, fills the desktop
    /// with every installed app. Generated pages are not saved.
    pub fn switch_desktop_mode(&mut self, mode: DesktopMode) -> Result<()> {
        let Some(mut preferences) = self.preferences.clone() else {
            bail!("Cannot switch desktop mode before settings are loaded");
        };

        self.commit_and_sweep()?;

        preferences.desktop_mode = mode;
        preferences.desktop_home_page = mode.index() as i32;

        let (mut desktop, dock) = self.read_layout(&preferences)?;

        if mode == DesktopMode::ShowAllApps && desktop.is_empty() {
            let apps = self.apps.list_apps()?;
            desktop = generate_default_pages(&apps, preferences.desktop_grid_x, preferences.desktop_grid_y);
        }

        self.preferences = Some(preferences);
        self.desktop = desktop;
        self.dock = dock;

        info!(mode = ?mode, pages = self.desktop.len(), "Switched desktop mode");
        Ok(())
    }

    /// Switch by mode ordinal, as reported by mode pickers
    pub fn switch_desktop_mode_index(&mut self, index: usize) -> Result<()> {
        let Some(mode) = DesktopMode::from_index(index) else {
            bail!("Unknown desktop mode index {index}");
        };
        self.switch_desktop_mode(mode)
    }

    // ==========================================================================
    // Preference setters
    // ==========================================================================

    /// Bind an action code to a gesture in memory; `false` if nothing is loaded
    pub fn set_gesture(&mut self, gesture: Gesture, action: i32) -> bool {
        match self.preferences.as_mut() {
            Some(preferences) => {
                preferences.set_gesture(gesture, action);
                true
            }
            None => {
                warn!(gesture = ?gesture, action, "Gesture set before settings were loaded, ignoring");
                false
            }
        }
    }

    pub fn set_single_click_gesture(&mut self, action: i32) -> bool {
        self.set_gesture(Gesture::SingleClick, action)
    }

    pub fn set_double_click_gesture(&mut self, action: i32) -> bool {
        self.set_gesture(Gesture::DoubleClick, action)
    }

    pub fn set_pinch_gesture(&mut self, action: i32) -> bool {
        self.set_gesture(Gesture::Pinch, action)
    }

    pub fn set_un_pinch_gesture(&mut self, action: i32) -> bool {
        self.set_gesture(Gesture::UnPinch, action)
    }

    pub fn set_swipe_down_gesture(&mut self, action: i32) -> bool {
        self.set_gesture(Gesture::SwipeDown, action)
    }

    pub fn set_swipe_up_gesture(&mut self, action: i32) -> bool {
        self.set_gesture(Gesture::SwipeUp, action)
    }

    // ==========================================================================
    // Accessors
    // ==========================================================================

    pub fn is_initialized(&self) -> bool {
        self.preferences.is_some()
    }

    pub fn preferences(&self) -> Option<&PreferenceRecord> {
        self.preferences.as_ref()
    }

    pub fn preferences_mut(&mut self) -> Option<&mut PreferenceRecord> {
        self.preferences.as_mut()
    }

    pub fn desktop_pages(&self) -> &[Page] {
        &self.desktop
    }

    pub fn desktop_pages_mut(&mut self) -> &mut Vec<Page> {
        &mut self.desktop
    }

    pub fn dock(&self) -> &[Item] {
        &self.dock
    }

    pub fn dock_mut(&mut self) -> &mut Vec<Item> {
        &mut self.dock
    }

    /// Append an empty page and return its index
    pub fn add_page(&mut self) -> usize {
        self.desktop.push(Page::default());
        self.desktop.len() - 1
    }

    pub fn remove_page(&mut self, index: usize) -> Option<Page> {
        (index < self.desktop.len()).then(|| self.desktop.remove(index))
    }

    pub fn config_store(&self) -> &C {
        &self.config
    }

    pub fn layout_store(&self) -> &L {
        &self.layout
    }

    pub fn icon_cache(&self) -> &I {
        &self.icons
    }
}
