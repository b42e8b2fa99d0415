//! The launcher preference record
//!
//! Persisted as a single JSON blob. Keys are camelCase so blobs written by
//! earlier launcher builds keep decoding. The schema is additive-only: never
//! change the type of an existing field, since a mismatched type makes the
//! whole blob fall back to defaults on the next start.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::constants::{colors, defaults};

// ==============================================================================
// Enum-valued preferences
// ==============================================================================

/// What the desktop pages show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DesktopMode {
    /// User-curated, paged desktop
    #[default]
    Normal,
    /// Desktop mirrors the installed-application catalog
    ShowAllApps,
}

/// How the app drawer lays out its contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DrawerMode {
    #[default]
    Paged,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Enum preferences decoded by name or ordinal, with unknown values mapped
/// to the default variant
pub trait PreferenceEnum: Sized + Copy + Default + PartialEq + std::fmt::Debug + 'static {
    /// All variants in ordinal order
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }

    /// Ordinal of this variant; every variant is listed in `VARIANTS`
    fn index(self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|v| *v == self)
            .unwrap_or_default()
    }
}

impl PreferenceEnum for DesktopMode {
    const VARIANTS: &'static [Self] = &[DesktopMode::Normal, DesktopMode::ShowAllApps];

    fn name(self) -> &'static str {
        match self {
            DesktopMode::Normal => "Normal",
            DesktopMode::ShowAllApps => "ShowAllApps",
        }
    }
}

impl PreferenceEnum for DrawerMode {
    const VARIANTS: &'static [Self] = &[DrawerMode::Paged, DrawerMode::Vertical];

    fn name(self) -> &'static str {
        match self {
            DrawerMode::Paged => "Paged",
            DrawerMode::Vertical => "Vertical",
        }
    }
}

impl PreferenceEnum for Theme {
    const VARIANTS: &'static [Self] = &[Theme::Light, Theme::Dark];

    fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl<'de> Deserialize<'de> for DesktopMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_lenient(deserializer)
    }
}

impl<'de> Deserialize<'de> for DrawerMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_lenient(deserializer)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_lenient(deserializer)
    }
}

/// Accepts a variant name, an ordinal, or anything else (mapped to default)
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: PreferenceEnum,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NameOrIndex {
        Name(String),
        Index(u64),
        Other(serde::de::IgnoredAny),
    }

    let decoded = match NameOrIndex::deserialize(deserializer)? {
        NameOrIndex::Name(name) => T::from_name(&name),
        NameOrIndex::Index(index) => usize::try_from(index).ok().and_then(T::from_index),
        NameOrIndex::Other(_) => None,
    };

    Ok(decoded.unwrap_or_else(|| {
        let fallback = T::default();
        warn!(fallback = ?fallback, "Unknown enum value in preferences, using default");
        fallback
    }))
}

/// Lists written as `null` by older builds decode as empty
fn deserialize_nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// ==============================================================================
// Gestures
// ==============================================================================

/// Desktop gestures that can be bound to an action code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SingleClick,
    DoubleClick,
    Pinch,
    UnPinch,
    SwipeDown,
    SwipeUp,
}

// ==============================================================================
// PreferenceRecord
// ==============================================================================

/// Flat record of every launcher preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceRecord {
    // icons
    pub icon_size: i32,
    pub icon_pack_name: String,

    // desktop
    pub desktop_mode: DesktopMode,
    pub desktop_home_page: i32,
    pub desktop_grid_x: i32,
    pub desktop_grid_y: i32,
    pub desktop_search_bar: bool,
    pub fullscreen: bool,
    pub swipe: bool,
    pub single_click: i32,
    pub double_click: i32,
    pub pinch: i32,
    pub un_pinch: i32,
    pub swipe_down: i32,
    pub swipe_up: i32,
    pub show_indicator: bool,
    pub desktop_show_label: bool,

    // app drawer
    pub drawer_color: i32,
    pub drawer_use_card: bool,
    pub drawer_card_color: i32,
    pub folder_color: i32,
    pub drawer_label_color: i32,
    pub drawer_mode: DrawerMode,
    pub drawer_grid_x: i32,
    pub drawer_grid_y: i32,
    #[serde(rename = "drawerGridX_L")]
    pub drawer_grid_x_landscape: i32,
    #[serde(rename = "drawerGridY_L")]
    pub drawer_grid_y_landscape: i32,
    pub drawer_search_bar: bool,
    pub drawer_remember_page: bool,
    /// Applications hidden from the drawer
    #[serde(deserialize_with = "deserialize_nullable_list")]
    pub hidden_list: Vec<String>,
    pub drawer_show_indicator: bool,
    pub drawer_light: bool,

    // dock
    pub dock_color: i32,
    pub dock_grid_x: i32,
    pub dock_show_label: bool,

    // minibar
    #[serde(rename = "minBarEnable")]
    pub mini_bar_enable: bool,
    /// Ordered shortcut identifiers shown in the minibar
    #[serde(deserialize_with = "deserialize_nullable_list")]
    pub mini_bar_arrangement: Vec<String>,

    // other
    pub theme: Theme,
    pub first_launcher: bool,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            icon_size: defaults::ICON_SIZE,
            icon_pack_name: String::new(),

            desktop_mode: DesktopMode::Normal,
            desktop_home_page: 0,
            desktop_grid_x: defaults::DESKTOP_GRID_X,
            desktop_grid_y: defaults::DESKTOP_GRID_Y,
            desktop_search_bar: true,
            fullscreen: false,
            swipe: false,
            single_click: 0,
            double_click: 0,
            pinch: 0,
            un_pinch: 0,
            swipe_down: 0,
            swipe_up: 0,
            show_indicator: true,
            desktop_show_label: true,

            drawer_color: colors::TRANSPARENT,
            drawer_use_card: true,
            drawer_card_color: colors::WHITE,
            folder_color: colors::WHITE,
            drawer_label_color: colors::DARK_GRAY,
            drawer_mode: DrawerMode::Paged,
            drawer_grid_x: defaults::DRAWER_GRID_X,
            drawer_grid_y: defaults::DRAWER_GRID_Y,
            drawer_grid_x_landscape: defaults::DRAWER_GRID_X_LANDSCAPE,
            drawer_grid_y_landscape: defaults::DRAWER_GRID_Y_LANDSCAPE,
            drawer_search_bar: true,
            drawer_remember_page: true,
            hidden_list: Vec::new(),
            drawer_show_indicator: true,
            drawer_light: true,

            dock_color: colors::TRANSPARENT,
            dock_grid_x: defaults::DOCK_GRID_X,
            dock_show_label: true,

            mini_bar_enable: true,
            mini_bar_arrangement: Vec::new(),

            theme: Theme::Light,
            first_launcher: true,
        }
    }
}

impl PreferenceRecord {
    /// Decode a persisted blob against the current field set
    pub fn decode(raw: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(raw)
    }

    /// Encode for persistence; identical records always encode identically
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Bind an action code to a gesture. The code is not range-checked.
    pub fn set_gesture(&mut self, gesture: Gesture, action: i32) {
        let slot = match gesture {
            Gesture::SingleClick => &mut self.single_click,
            Gesture::DoubleClick => &mut self.double_click,
            Gesture::Pinch => &mut self.pinch,
            Gesture::UnPinch => &mut self.un_pinch,
            Gesture::SwipeDown => &mut self.swipe_down,
            Gesture::SwipeUp => &mut self.swipe_up,
        };
        *slot = action;
    }

    pub fn gesture(&self, gesture: Gesture) -> i32 {
        match gesture {
            Gesture::SingleClick => self.single_click,
            Gesture::DoubleClick => self.double_click,
            Gesture::Pinch => self.pinch,
            Gesture::UnPinch => self.un_pinch,
            Gesture::SwipeDown => self.swipe_down,
            Gesture::SwipeUp => self.swipe_up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let expected = PreferenceRecord {
            icon_size: 58,
            icon_pack_name: String::new(),
            desktop_mode: DesktopMode::Normal,
            desktop_home_page: 0,
            desktop_grid_x: 4,
            desktop_grid_y: 4,
            desktop_search_bar: true,
            fullscreen: false,
            swipe: false,
            single_click: 0,
            double_click: 0,
            pinch: 0,
            un_pinch: 0,
            swipe_down: 0,
            swipe_up: 0,
            show_indicator: true,
            desktop_show_label: true,
            drawer_color: 0,
            drawer_use_card: true,
            drawer_card_color: -1,
            folder_color: -1,
            drawer_label_color: 0xFF444444_u32 as i32,
            drawer_mode: DrawerMode::Paged,
            drawer_grid_x: 4,
            drawer_grid_y: 5,
            drawer_grid_x_landscape: 5,
            drawer_grid_y_landscape: 3,
            drawer_search_bar: true,
            drawer_remember_page: true,
            hidden_list: Vec::new(),
            drawer_show_indicator: true,
            drawer_light: true,
            dock_color: 0,
            dock_grid_x: 5,
            dock_show_label: true,
            mini_bar_enable: true,
            mini_bar_arrangement: Vec::new(),
            theme: Theme::Light,
            first_launcher: true,
        };
        assert_eq!(PreferenceRecord::default(), expected);
    }

    #[test]
    fn test_empty_blob_decodes_to_documented_defaults() {
        assert_eq!(
            PreferenceRecord::decode(b"{}").unwrap(),
            PreferenceRecord::default()
        );
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let prefs = PreferenceRecord::decode(br#"{"iconSize": 64}"#).unwrap();
        let expected = PreferenceRecord {
            icon_size: 64,
            ..PreferenceRecord::default()
        };
        assert_eq!(prefs, expected);
    }

    #[test]
    fn test_camel_case_keys_on_disk() {
        let encoded = PreferenceRecord::default().encode().unwrap();
        assert!(encoded.contains("\"desktopGridX\""));
        assert!(encoded.contains("\"drawerGridX_L\""));
        assert!(encoded.contains("\"minBarEnable\""));
        assert!(encoded.contains("\"unPinch\""));
        assert!(encoded.contains("\"desktopMode\": \"Normal\""));
    }

    #[test]
    fn test_enum_accepts_name_and_ordinal() {
        let by_name = PreferenceRecord::decode(br#"{"desktopMode": "ShowAllApps"}"#).unwrap();
        assert_eq!(by_name.desktop_mode, DesktopMode::ShowAllApps);

        let by_index = PreferenceRecord::decode(br#"{"drawerMode": 1, "theme": 1}"#).unwrap();
        assert_eq!(by_index.drawer_mode, DrawerMode::Vertical);
        assert_eq!(by_index.theme, Theme::Dark);
    }

    #[test]
    fn test_unknown_enum_value_falls_back_to_default() {
        let prefs = PreferenceRecord::decode(
            br#"{"desktopMode": "Carousel", "drawerMode": 42, "theme": {"x": 1}}"#,
        )
        .unwrap();
        assert_eq!(prefs.desktop_mode, DesktopMode::Normal);
        assert_eq!(prefs.drawer_mode, DrawerMode::Paged);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_null_lists_decode_empty() {
        let prefs =
            PreferenceRecord::decode(br#"{"hiddenList": null, "miniBarArrangement": ["a"]}"#)
                .unwrap();
        assert!(prefs.hidden_list.is_empty());
        assert_eq!(prefs.mini_bar_arrangement, vec!["a".to_string()]);
    }

    #[test]
    fn test_retyped_field_is_decode_error() {
        assert!(PreferenceRecord::decode(br#"{"iconSize": "large"}"#).is_err());
        assert!(PreferenceRecord::decode(b"{not json").is_err());
    }

    #[test]
    fn test_set_gesture_touches_only_its_slot() {
        let mut prefs = PreferenceRecord::default();
        prefs.set_gesture(Gesture::Pinch, 7);
        prefs.set_gesture(Gesture::SwipeUp, -3);
        assert_eq!(prefs.gesture(Gesture::Pinch), 7);
        assert_eq!(prefs.gesture(Gesture::SwipeUp), -3);
        assert_eq!(prefs.gesture(Gesture::SingleClick), 0);
        assert_eq!(prefs.un_pinch, 0);
    }

    #[test]
    fn test_desktop_mode_index() {
        assert_eq!(DesktopMode::from_index(1), Some(DesktopMode::ShowAllApps));
        assert_eq!(DesktopMode::from_index(2), None);
        assert_eq!(DesktopMode::ShowAllApps.index(), 1);
        assert_eq!(DesktopMode::Normal.index(), 0);
        assert_eq!(Theme::Dark.index(), 1);
    }
}
