//! Coarse session mode, layout, and overlay flags.
//!
//! Pure mode data -- no app content lives here. The cross-component side
//! effects of layout toggling (clearing the window registry and per-app
//! state) are applied by [`crate::shell::Shell`].

/// Which full-screen surface is active in Mobile layout.
///
/// Desktop layout never leaves `Home`; windows float above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Lock screen. Reachable only at session start; there is no re-lock.
    Locked,
    Home,
    AppFullscreen,
}

/// Behavior profile for the window model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// One app visible at a time, full screen.
    Mobile,
    /// Multiple windows composited over a persistent home backdrop.
    Desktop,
}

impl LayoutMode {
    pub fn flipped(self) -> Self {
        match self {
            Self::Mobile => Self::Desktop,
            Self::Desktop => Self::Mobile,
        }
    }
}

/// A transient takeover surface layered above the base view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    ControlCenter,
    /// The start-menu / app-drawer surface.
    Launcher,
}

/// Session-scoped mode state. Created locked, in Mobile layout.
#[derive(Debug)]
pub struct SessionState {
    pub mode: SessionMode,
    pub layout: LayoutMode,
    control_center_open: bool,
    launcher_open: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            mode: SessionMode::Locked,
            layout: LayoutMode::Mobile,
            control_center_open: false,
            launcher_open: false,
        }
    }

    /// Leave the lock screen.
    ///
    /// Calling this when already unlocked is a precondition violation --
    /// the trigger is gated upstream by the lock screen -- so it is
    /// debug-asserted and otherwise ignored.
    pub fn unlock(&mut self) {
        debug_assert_eq!(self.mode, SessionMode::Locked, "unlock outside lock screen");
        if self.mode == SessionMode::Locked {
            self.mode = SessionMode::Home;
        }
    }

    /// Flip the layout and reset mode state.
    ///
    /// A hard reset, not a migration: the two layouts have incompatible
    /// window models, so the caller also discards the window registry.
    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.flipped();
        self.mode = SessionMode::Home;
        self.close_overlays();
    }

    pub fn overlay_open(&self, which: Overlay) -> bool {
        match which {
            Overlay::ControlCenter => self.control_center_open,
            Overlay::Launcher => self.launcher_open,
        }
    }

    /// Set one overlay flag. Opening one closes the other: at most one
    /// takeover surface is presented at a time.
    pub fn set_overlay(&mut self, which: Overlay, open: bool) {
        match which {
            Overlay::ControlCenter => {
                self.control_center_open = open;
                if open {
                    self.launcher_open = false;
                }
            },
            Overlay::Launcher => {
                self.launcher_open = open;
                if open {
                    self.control_center_open = false;
                }
            },
        }
    }

    pub fn toggle_overlay(&mut self, which: Overlay) {
        let open = !self.overlay_open(which);
        self.set_overlay(which, open);
    }

    pub fn close_overlays(&mut self) {
        self.control_center_open = false;
        self.launcher_open = false;
    }

    /// The overlay currently presented, if any.
    pub fn active_overlay(&self) -> Option<Overlay> {
        if self.control_center_open {
            Some(Overlay::ControlCenter)
        } else if self.launcher_open {
            Some(Overlay::Launcher)
        } else {
            None
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
