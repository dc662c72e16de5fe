//! Derived view selection.
//!
//! A pure function of shell state with no side effects: the renderer
//! receives exactly what should be on screen and layers it with the
//! [`crate::transition`] specs. Mobile shows one surface at a time;
//! Desktop composites every open window over the home backdrop.

use matcha_types::app::AppId;

use crate::session::{LayoutMode, Overlay, SessionMode};
use crate::shell::Shell;

/// Wallpaper treatment hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperFx {
    /// Slightly zoomed in (lock screen).
    pub zoomed: bool,
    /// Blurred and darkened (an app sheet or overlay is up).
    pub blurred: bool,
    /// Constant dim layer (mobile layout only).
    pub dimmed: bool,
}

/// The single fullscreen surface in Mobile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileSurface {
    Lock,
    Home,
    App(AppId),
}

/// One desktop window, in open order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowView {
    pub app: AppId,
    /// Front-most and interactive; unfocused windows render dimmed and
    /// inert except for focus-acquisition clicks.
    pub focused: bool,
}

/// One taskbar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub app: AppId,
    pub open: bool,
    pub focused: bool,
}

/// The desktop taskbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarView {
    pub entries: Vec<TaskbarEntry>,
    /// "HH:MM" from the status bar cache.
    pub clock: String,
}

/// What the renderer should put on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSelection {
    Mobile {
        surface: MobileSurface,
        /// Status bar strip (hidden while locked).
        status_bar: bool,
        overlay: Option<Overlay>,
        wallpaper: WallpaperFx,
    },
    /// Home backdrop is always present underneath.
    Desktop {
        windows: Vec<WindowView>,
        taskbar: TaskbarView,
        overlay: Option<Overlay>,
        wallpaper: WallpaperFx,
    },
}

/// Compute the view selection for the current shell state.
pub fn derive(shell: &Shell) -> ViewSelection {
    let session = shell.session();
    let overlay = session.active_overlay();
    match session.layout {
        LayoutMode::Mobile => {
            let surface = match session.mode {
                SessionMode::Locked => MobileSurface::Lock,
                SessionMode::Home => MobileSurface::Home,
                SessionMode::AppFullscreen => match shell.windows().focused() {
                    Some(app) => MobileSurface::App(app),
                    // Unreachable by construction; fall back to Home.
                    None => MobileSurface::Home,
                },
            };
            ViewSelection::Mobile {
                surface,
                status_bar: session.mode != SessionMode::Locked,
                overlay,
                wallpaper: WallpaperFx {
                    zoomed: session.mode == SessionMode::Locked,
                    blurred: session.mode == SessionMode::AppFullscreen || overlay.is_some(),
                    dimmed: true,
                },
            }
        },
        LayoutMode::Desktop => {
            let focused = shell.windows().focused();
            let windows = shell
                .windows()
                .open_apps()
                .iter()
                .map(|app| WindowView {
                    app: *app,
                    focused: Some(*app) == focused,
                })
                .collect();
            ViewSelection::Desktop {
                windows,
                taskbar: taskbar(shell),
                overlay,
                wallpaper: WallpaperFx {
                    zoomed: false,
                    blurred: overlay.is_some(),
                    dimmed: false,
                },
            }
        },
    }
}

/// Pinned apps first (config order), then unpinned open apps in open order.
fn taskbar(shell: &Shell) -> TaskbarView {
    let registry = shell.windows();
    let pins = &shell.config().taskbar_pins;
    let mut entries: Vec<TaskbarEntry> = pins
        .iter()
        .map(|app| TaskbarEntry {
            app: *app,
            open: registry.is_open(*app),
            focused: registry.focused() == Some(*app),
        })
        .collect();
    for app in registry.open_apps() {
        if !pins.contains(app) {
            entries.push(TaskbarEntry {
                app: *app,
                open: true,
                focused: registry.focused() == Some(*app),
            });
        }
    }
    TaskbarView {
        entries,
        clock: shell.status().clock().to_string(),
    }
}
