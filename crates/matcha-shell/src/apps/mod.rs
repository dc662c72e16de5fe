//! Per-app runtime state.
//!
//! State is created when an app is opened and dropped when it closes --
//! the same lifetime a mounted view has. Re-opening an already-open app
//! keeps its state (only focus changes); a closed-and-reopened app starts
//! fresh. Apps without content state (mail, calendar, ...) simply render
//! an empty surface and carry nothing here.

pub mod assistant;
pub mod browser;
pub mod camera;
pub mod settings;

use matcha_types::app::AppId;
use matcha_types::config::ShellConfig;

pub use assistant::AssistantState;
pub use browser::BrowserState;
pub use camera::CameraState;
pub use settings::SettingsState;

/// Slots for the stateful apps.
#[derive(Default)]
pub struct AppStates {
    settings: Option<SettingsState>,
    camera: Option<CameraState>,
    browser: Option<BrowserState>,
    assistant: Option<AssistantState>,
}

impl AppStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure state exists for a newly opened app.
    pub fn create(&mut self, id: AppId, config: &ShellConfig) {
        match id {
            AppId::Settings => {
                self.settings.get_or_insert_with(SettingsState::new);
            },
            AppId::Camera => {
                self.camera.get_or_insert_with(CameraState::new);
            },
            AppId::Browser => {
                if self.browser.is_none() {
                    self.browser = Some(BrowserState::new(&config.browser));
                }
            },
            AppId::Assistant => {
                self.assistant.get_or_insert_with(AssistantState::new);
            },
            // No content state for the rest.
            _ => {},
        }
    }

    /// Drop state for a closed app.
    ///
    /// For the assistant this is also the cancellation scope: the
    /// pending-reply receiver dies with the state, so a late completion
    /// is discarded in the channel.
    pub fn destroy(&mut self, id: AppId) {
        match id {
            AppId::Settings => self.settings = None,
            AppId::Camera => self.camera = None,
            AppId::Browser => self.browser = None,
            AppId::Assistant => self.assistant = None,
            _ => {},
        }
    }

    /// Drop everything (layout flip).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn settings(&self) -> Option<&SettingsState> {
        self.settings.as_ref()
    }

    pub fn settings_mut(&mut self) -> Option<&mut SettingsState> {
        self.settings.as_mut()
    }

    pub fn camera(&self) -> Option<&CameraState> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut CameraState> {
        self.camera.as_mut()
    }

    pub fn browser(&self) -> Option<&BrowserState> {
        self.browser.as_ref()
    }

    pub fn browser_mut(&mut self) -> Option<&mut BrowserState> {
        self.browser.as_mut()
    }

    pub fn assistant(&self) -> Option<&AssistantState> {
        self.assistant.as_ref()
    }

    pub fn assistant_mut(&mut self) -> Option<&mut AssistantState> {
        self.assistant.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_destroy_round_trip() {
        let cfg = ShellConfig::default();
        let mut apps = AppStates::new();
        apps.create(AppId::Assistant, &cfg);
        assert!(apps.assistant().is_some());
        apps.destroy(AppId::Assistant);
        assert!(apps.assistant().is_none());
    }

    #[test]
    fn create_is_idempotent_and_preserves_state() {
        let cfg = ShellConfig::default();
        let mut apps = AppStates::new();
        apps.create(AppId::Camera, &cfg);
        apps.camera_mut().unwrap().select_zoom("5x");
        apps.create(AppId::Camera, &cfg);
        assert_eq!(apps.camera().unwrap().zoom(), "5x");
    }

    #[test]
    fn stateless_apps_carry_nothing() {
        let cfg = ShellConfig::default();
        let mut apps = AppStates::new();
        apps.create(AppId::Mail, &cfg);
        apps.destroy(AppId::Mail);
    }

    #[test]
    fn clear_drops_all_state() {
        let cfg = ShellConfig::default();
        let mut apps = AppStates::new();
        apps.create(AppId::Settings, &cfg);
        apps.create(AppId::Browser, &cfg);
        apps.clear();
        assert!(apps.settings().is_none());
        assert!(apps.browser().is_none());
    }
}
