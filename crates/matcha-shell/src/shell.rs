//! The single owned state object.
//!
//! Every mutation goes through the named operations here (or through the
//! per-app state objects it hands out) -- there are no ambient globals,
//! so the cross-component invariants stay centrally enforced: opening an
//! app dismisses overlays, flipping the layout discards window state,
//! and per-app state lives exactly as long as its registry entry.

use std::sync::Arc;

use matcha_net::TextGenService;
use matcha_types::app::AppId;
use matcha_types::config::ShellConfig;

use crate::apps::AppStates;
use crate::controlcenter::ControlCenterState;
use crate::homescreen::LauncherState;
use crate::lockscreen::{KeypadOutcome, LockScreenState};
use crate::platform::WallTime;
use crate::registry::WindowRegistry;
use crate::session::{LayoutMode, Overlay, SessionMode, SessionState};
use crate::statusbar::StatusBar;
use crate::view::{self, ViewSelection};

/// Session-scoped shell state. Created locked, destroyed on process end.
pub struct Shell {
    config: ShellConfig,
    session: SessionState,
    windows: WindowRegistry,
    lock: LockScreenState,
    launcher: LauncherState,
    control_center: ControlCenterState,
    status: StatusBar,
    apps: AppStates,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let lock = LockScreenState::new(&config.pin);
        Self {
            config,
            session: SessionState::new(),
            windows: WindowRegistry::new(),
            lock,
            launcher: LauncherState::new(),
            control_center: ControlCenterState::new(),
            status: StatusBar::new(),
            apps: AppStates::new(),
        }
    }

    // -- Lock screen ----------------------------------------------------------

    /// Forward a PIN pad press; a completed correct entry unlocks.
    pub fn press_pin_key(&mut self, digit: char) -> KeypadOutcome {
        let outcome = self.lock.push_digit(digit);
        if outcome == KeypadOutcome::Unlocked {
            self.session.unlock();
        }
        outcome
    }

    pub fn pin_backspace(&mut self) {
        self.lock.backspace();
    }

    pub fn dismiss_pin_error(&mut self) {
        self.lock.dismiss_error();
    }

    // -- Session --------------------------------------------------------------

    /// Flip Mobile/Desktop. Hard reset of window state: open apps, focus,
    /// per-app state, overlays, and the launcher query are all discarded.
    pub fn toggle_layout(&mut self) {
        self.session.toggle_layout();
        self.windows.clear();
        self.apps.clear();
        self.launcher.clear();
        log::info!("layout switched to {:?}", self.session.layout);
    }

    pub fn set_overlay(&mut self, which: Overlay, open: bool) {
        self.session.set_overlay(which, open);
        if !self.session.overlay_open(Overlay::Launcher) {
            self.launcher.clear();
        }
    }

    pub fn toggle_overlay(&mut self, which: Overlay) {
        let open = !self.session.overlay_open(which);
        self.set_overlay(which, open);
    }

    // -- Window registry ------------------------------------------------------

    /// Open (or refocus) an app. Dismisses any active overlay; in Mobile
    /// layout the app takes the whole screen.
    pub fn open_app(&mut self, id: AppId) {
        let added = self.windows.open(id);
        self.apps.create(id, &self.config);
        self.session.close_overlays();
        self.launcher.clear();
        if self.session.layout == LayoutMode::Mobile {
            self.session.mode = SessionMode::AppFullscreen;
        }
        if added {
            log::debug!("opened {id}");
        }
    }

    /// Close an app (no-op if not open). Its runtime state is dropped --
    /// for the assistant that also cancels an in-flight reply. In Mobile
    /// layout the home screen surfaces once nothing remains open.
    pub fn close_app(&mut self, id: AppId) {
        if !self.windows.close(id) {
            return;
        }
        self.apps.destroy(id);
        if self.session.layout == LayoutMode::Mobile && self.windows.is_empty() {
            self.session.mode = SessionMode::Home;
        }
        log::debug!("closed {id}");
    }

    /// Focus an already-open window (Desktop). Non-members are a no-op.
    pub fn focus_app(&mut self, id: AppId) -> bool {
        self.windows.focus(id)
    }

    // -- Event-loop hooks -----------------------------------------------------

    /// 1 s clock tick: refresh the cached status-bar strings.
    pub fn tick(&mut self, time: &WallTime) {
        self.status.update(time);
    }

    /// Drain the assistant's pending reply, if one landed.
    pub fn poll_assistant(&mut self) -> bool {
        match self.apps.assistant_mut() {
            Some(assistant) => assistant.poll(),
            None => false,
        }
    }

    /// Submit the assistant input buffer through `service`.
    pub fn submit_assistant(&mut self, service: &Arc<dyn TextGenService>) -> bool {
        match self.apps.assistant_mut() {
            Some(assistant) => assistant.submit(service),
            None => false,
        }
    }

    // -- Derivation and access ------------------------------------------------

    /// Pure view selection for the renderer.
    pub fn view(&self) -> ViewSelection {
        view::derive(self)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    pub fn lock_screen(&self) -> &LockScreenState {
        &self.lock
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn launcher(&self) -> &LauncherState {
        &self.launcher
    }

    pub fn launcher_mut(&mut self) -> &mut LauncherState {
        &mut self.launcher
    }

    pub fn control_center(&self) -> &ControlCenterState {
        &self.control_center
    }

    pub fn control_center_mut(&mut self) -> &mut ControlCenterState {
        &mut self.control_center
    }

    pub fn apps(&self) -> &AppStates {
        &self.apps
    }

    pub fn apps_mut(&mut self) -> &mut AppStates {
        &mut self.apps
    }
}
