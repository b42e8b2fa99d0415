//! Command-line front end over the file-backed stores

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use crate::config::{DesktopMode, Gesture};
use crate::manager::SettingsManager;
use crate::stores::fs::{FsAppCatalog, FsConfigStore, FsIconCache, FsLayoutStore, default_root};

#[derive(Parser, Debug)]
#[command(name = "launcher-settings")]
#[command(about = "Inspect and edit launcher settings and desktop layout", long_about = None)]
pub struct Cli {
    /// Settings directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the preference blob and layout summary
    Show,

    /// Bind an action code to a gesture
    Gesture {
        gesture: GestureArg,
        action: i32,
    },

    /// Switch the desktop mode and save the result
    SwitchMode { mode: ModeArg },

    /// Save and delete cached icons no shortcut refers to
    Sweep,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum GestureArg {
    SingleClick,
    DoubleClick,
    Pinch,
    UnPinch,
    SwipeDown,
    SwipeUp,
}

impl From<GestureArg> for Gesture {
    fn from(arg: GestureArg) -> Self {
        match arg {
            GestureArg::SingleClick => Gesture::SingleClick,
            GestureArg::DoubleClick => Gesture::DoubleClick,
            GestureArg::Pinch => Gesture::Pinch,
            GestureArg::UnPinch => Gesture::UnPinch,
            GestureArg::SwipeDown => Gesture::SwipeDown,
            GestureArg::SwipeUp => Gesture::SwipeUp,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    Normal,
    ShowAllApps,
}

impl From<ModeArg> for DesktopMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Normal => DesktopMode::Normal,
            ModeArg::ShowAllApps => DesktopMode::ShowAllApps,
        }
    }
}

pub type FsSettingsManager = SettingsManager<FsConfigStore, FsLayoutStore, FsAppCatalog, FsIconCache>;

/// Manager over the file-backed stores rooted at `root`
pub fn open_manager(root: PathBuf) -> FsSettingsManager {
    SettingsManager::new(
        FsConfigStore::new(&root),
        FsLayoutStore::new(&root),
        FsAppCatalog::new(&root),
        FsIconCache::new(&root),
    )
}

/// Run a command; returns the text to print
pub fn run(cli: Cli) -> Result<String> {
    let root = cli.root.unwrap_or_else(default_root);
    info!(root = %root.display(), command = ?cli.command, "Running command");

    let mut manager = open_manager(root);
    if !manager.load()? {
        info!("Stored settings were unreadable, continuing with defaults");
    }

    let output = match cli.command {
        Commands::Show => {
            let Some(encoded) = manager.preferences().map(|p| p.encode()).transpose()? else {
                bail!("No settings loaded");
            };
            format!(
                "{encoded}\npages: {}\ndock: {}",
                manager.desktop_pages().len(),
                manager.dock().len()
            )
        }
        Commands::Gesture { gesture, action } => {
            manager.set_gesture(gesture.into(), action);
            manager.save()?;
            let bound = manager
                .preferences()
                .map(|p| p.gesture(gesture.into()))
                .unwrap_or(action);
            format!("{gesture:?} = {bound}")
        }
        Commands::SwitchMode { mode } => {
            manager.switch_desktop_mode(mode.into())?;
            manager.save()?;
            format!("mode: {mode:?}, pages: {}", manager.desktop_pages().len())
        }
        Commands::Sweep => {
            let deleted = manager.commit_and_sweep()?;
            let ids: Vec<&str> = deleted.iter().map(String::as_str).collect();
            format!("deleted {} icon(s): {}", ids.len(), ids.join(", "))
        }
    };

    Ok(output)
}
