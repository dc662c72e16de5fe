//! Settings app: a static catalog plus search.

/// One tappable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsItem {
    pub label: &'static str,
    pub detail: &'static str,
}

/// A titled group of rows.
#[derive(Debug, Clone, Copy)]
pub struct SettingsSection {
    pub title: &'static str,
    pub items: &'static [SettingsItem],
}

/// The full settings catalog.
pub const SECTIONS: &[SettingsSection] = &[
    SettingsSection {
        title: "Connectivity & devices",
        items: &[
            SettingsItem {
                label: "Network & internet",
                detail: "Wi-Fi, hotspot, VPN",
            },
            SettingsItem {
                label: "Connected devices",
                detail: "Bluetooth, quick pair",
            },
        ],
    },
    SettingsSection {
        title: "Look & feel",
        items: &[
            SettingsItem {
                label: "Smooth display (120Hz+)",
                detail: "On - high refresh everywhere",
            },
            SettingsItem {
                label: "Wallpaper & style",
                detail: "Matcha Latte, themed icons",
            },
            SettingsItem {
                label: "Desktop mode",
                detail: "Activates when a display connects",
            },
        ],
    },
    SettingsSection {
        title: "Apps & notifications",
        items: &[
            SettingsItem {
                label: "Apps",
                detail: "Permissions, default apps",
            },
            SettingsItem {
                label: "Notifications",
                detail: "History, chat bubbles",
            },
            SettingsItem {
                label: "Sound & vibration",
                detail: "Volume, haptics",
            },
        ],
    },
    SettingsSection {
        title: "Security & system",
        items: &[
            SettingsItem {
                label: "Security & privacy",
                detail: "Screen lock, app permissions",
            },
            SettingsItem {
                label: "Battery",
                detail: "98% - running normally",
            },
            SettingsItem {
                label: "Storage",
                detail: "24.5 GB of 128 GB used",
            },
            SettingsItem {
                label: "About device",
                detail: "matcha-os v0.1",
            },
        ],
    },
];

/// Runtime state: just the search query.
#[derive(Debug, Default)]
pub struct SettingsState {
    query: String,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Rows matching the query (label or detail, case-insensitive);
    /// every row when the query is blank.
    pub fn matches(&self) -> Vec<&'static SettingsItem> {
        let needle = self.query.trim().to_lowercase();
        SECTIONS
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|item| {
                needle.is_empty()
                    || item.label.to_lowercase().contains(&needle)
                    || item.detail.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_items() -> usize {
        SECTIONS.iter().map(|s| s.items.len()).sum()
    }

    #[test]
    fn blank_query_lists_every_row() {
        let state = SettingsState::new();
        assert_eq!(state.matches().len(), total_items());
    }

    #[test]
    fn query_matches_labels() {
        let mut state = SettingsState::new();
        state.set_query("battery");
        let hits = state.matches();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "Battery");
    }

    #[test]
    fn query_matches_details_too() {
        let mut state = SettingsState::new();
        state.set_query("bluetooth");
        assert!(
            state
                .matches()
                .iter()
                .any(|i| i.label == "Connected devices")
        );
    }

    #[test]
    fn query_is_case_insensitive() {
        let mut state = SettingsState::new();
        state.set_query("WALLPAPER");
        assert_eq!(state.matches().len(), 1);
    }

    #[test]
    fn no_hits_for_nonsense() {
        let mut state = SettingsState::new();
        state.set_query("flux capacitor");
        assert!(state.matches().is_empty());
    }
}
