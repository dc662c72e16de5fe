//! Home screen content: favorites, dock, and the launcher grid.
//!
//! Pure data over the fixed app set plus the launcher's search filter.
//! The glance card is static copy the renderer shows above the grid.

use matcha_types::app::AppId;

/// Shortcut row shown at the top of the mobile home screen.
pub fn favorites() -> &'static [AppId] {
    &AppId::ALL[..3]
}

/// Dock row pinned near the bottom of the mobile home screen.
pub fn dock() -> &'static [AppId] {
    &AppId::ALL[3..]
}

/// Static glance-card copy.
#[derive(Debug, Clone, Copy)]
pub struct GlanceCard {
    pub headline: &'static str,
    pub time_range: &'static str,
    pub temperature: &'static str,
}

pub const GLANCE: GlanceCard = GlanceCard {
    headline: "Coffee with Robin in 30 min",
    time_range: "10:00 - 11:00 AM",
    temperature: "68\u{b0}F",
};

/// Search state for the launcher (desktop app-drawer) grid.
#[derive(Debug, Default)]
pub struct LauncherState {
    query: String,
}

impl LauncherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apps whose label matches the query (all of them when empty).
    pub fn grid(&self) -> Vec<AppId> {
        let needle = self.query.trim().to_lowercase();
        AppId::ALL
            .iter()
            .copied()
            .filter(|app| needle.is_empty() || app.label().to_lowercase().contains(&needle))
            .collect()
    }
}
