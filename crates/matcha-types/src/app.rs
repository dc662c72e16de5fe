//! The closed set of app identifiers known to the shell.
//!
//! An `AppId` is an opaque token: the registry tracks which ones are open
//! and focused, the view layer decides what to draw for each. There is no
//! per-instance identity -- an app is open at most once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a launchable app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Settings,
    Messages,
    /// The AI chat assistant.
    Assistant,
    Camera,
    Browser,
    Calendar,
    Mail,
    /// Video player.
    Play,
}

impl AppId {
    /// All app identifiers, in home-grid order.
    pub const ALL: &[AppId] = &[
        AppId::Settings,
        AppId::Assistant,
        AppId::Browser,
        AppId::Camera,
        AppId::Play,
        AppId::Mail,
        AppId::Calendar,
        AppId::Messages,
    ];

    /// Display label for launcher icons and window title bars.
    pub fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Messages => "Messages",
            Self::Assistant => "Assistant",
            Self::Camera => "Camera",
            Self::Browser => "Browser",
            Self::Calendar => "Calendar",
            Self::Mail => "Mail",
            Self::Play => "Play",
        }
    }

    /// Stable lowercase token (config files, CLI, log lines).
    pub fn token(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Messages => "messages",
            Self::Assistant => "assistant",
            Self::Camera => "camera",
            Self::Browser => "browser",
            Self::Calendar => "calendar",
            Self::Mail => "mail",
            Self::Play => "play",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for AppId {
    type Err = UnknownApp;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "settings" => Ok(Self::Settings),
            "messages" => Ok(Self::Messages),
            // "ai" kept as an alias for muscle memory.
            "assistant" | "ai" => Ok(Self::Assistant),
            "camera" => Ok(Self::Camera),
            "browser" => Ok(Self::Browser),
            "calendar" => Ok(Self::Calendar),
            "mail" => Ok(Self::Mail),
            "play" => Ok(Self::Play),
            other => Err(UnknownApp(other.to_string())),
        }
    }
}

/// Parse error for an app token outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownApp(pub String);

impl fmt::Display for UnknownApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown app: {}", self.0)
    }
}

impl std::error::Error for UnknownApp {}
