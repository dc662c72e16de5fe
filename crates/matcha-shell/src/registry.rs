//! Open-app list and focus.
//!
//! The list is insertion-ordered and duplicate-free: it reflects open
//! order, never z-order or focus order. Focus is always a member of the
//! list, or `None` exactly when the list is empty. Every operation is
//! total -- closing an absent app and focusing a non-member are no-ops,
//! not faults.

use matcha_types::app::AppId;

/// Ordered set of open apps plus the focused one.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    open: Vec<AppId>,
    focused: Option<AppId>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `id` (append if absent) and focus it.
    ///
    /// Returns `true` when the app was newly added. Re-opening an
    /// already-open app changes only focus, never list position.
    pub fn open(&mut self, id: AppId) -> bool {
        let added = if self.open.contains(&id) {
            false
        } else {
            self.open.push(id);
            true
        };
        self.focused = Some(id);
        added
    }

    /// Close `id` if open. Returns `true` when it was removed.
    ///
    /// If `id` was focused, focus falls to the most recently opened of
    /// the remaining apps, or clears when none remain.
    pub fn close(&mut self, id: AppId) -> bool {
        let Some(pos) = self.open.iter().position(|a| *a == id) else {
            return false;
        };
        self.open.remove(pos);
        if self.focused == Some(id) {
            self.focused = self.open.last().copied();
        }
        true
    }

    /// Focus an already-open app. A non-member is a logged no-op.
    pub fn focus(&mut self, id: AppId) -> bool {
        if self.open.contains(&id) {
            self.focused = Some(id);
            true
        } else {
            log::warn!("focus request for app that is not open: {id}");
            false
        }
    }

    pub fn open_apps(&self) -> &[AppId] {
        &self.open
    }

    pub fn focused(&self) -> Option<AppId> {
        self.focused
    }

    pub fn is_open(&self, id: AppId) -> bool {
        self.open.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Discard everything (layout flip).
    pub fn clear(&mut self) {
        self.open.clear();
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn open_appends_and_focuses() {
        let mut reg = WindowRegistry::new();
        assert!(reg.open(AppId::Camera));
        assert!(reg.open(AppId::Settings));
        assert_eq!(reg.open_apps(), &[AppId::Camera, AppId::Settings]);
        assert_eq!(reg.focused(), Some(AppId::Settings));
    }

    #[test]
    fn reopen_changes_only_focus() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Camera);
        reg.open(AppId::Settings);
        assert!(!reg.open(AppId::Camera));
        assert_eq!(reg.open_apps(), &[AppId::Camera, AppId::Settings]);
        assert_eq!(reg.focused(), Some(AppId::Camera));
    }

    #[test]
    fn close_focused_falls_back_to_last_remaining() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Camera);
        reg.open(AppId::Browser);
        reg.open(AppId::Settings);
        assert!(reg.close(AppId::Settings));
        assert_eq!(reg.focused(), Some(AppId::Browser));
        assert_eq!(reg.open_apps(), &[AppId::Camera, AppId::Browser]);
    }

    #[test]
    fn close_unfocused_keeps_focus() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Camera);
        reg.open(AppId::Settings);
        reg.close(AppId::Camera);
        assert_eq!(reg.focused(), Some(AppId::Settings));
    }

    #[test]
    fn close_last_clears_focus() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Camera);
        assert!(reg.close(AppId::Camera));
        assert!(reg.is_empty());
        assert_eq!(reg.focused(), None);
    }

    #[test]
    fn close_absent_is_noop() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Camera);
        assert!(!reg.close(AppId::Mail));
        assert_eq!(reg.open_apps(), &[AppId::Camera]);
        assert_eq!(reg.focused(), Some(AppId::Camera));
    }

    #[test]
    fn focus_non_member_is_noop() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Camera);
        assert!(!reg.focus(AppId::Mail));
        assert_eq!(reg.focused(), Some(AppId::Camera));
    }

    #[test]
    fn focus_does_not_reorder() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Assistant);
        reg.open(AppId::Browser);
        assert!(reg.focus(AppId::Assistant));
        assert_eq!(reg.open_apps(), &[AppId::Assistant, AppId::Browser]);
        assert_eq!(reg.focused(), Some(AppId::Assistant));
    }

    #[test]
    fn clear_resets_everything() {
        let mut reg = WindowRegistry::new();
        reg.open(AppId::Camera);
        reg.open(AppId::Mail);
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.focused(), None);
    }

    // -- Sequence invariants --------------------------------------------------

    #[derive(Debug, Clone)]
    enum Op {
        Open(AppId),
        Close(AppId),
        Focus(AppId),
    }

    fn arb_app() -> impl Strategy<Value = AppId> {
        prop::sample::select(AppId::ALL.to_vec())
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            arb_app().prop_map(Op::Open),
            arb_app().prop_map(Op::Close),
            arb_app().prop_map(Op::Focus),
        ]
    }

    proptest! {
        #[test]
        fn no_duplicates_and_focus_is_member(ops in prop::collection::vec(arb_op(), 0..64)) {
            let mut reg = WindowRegistry::new();
            for op in ops {
                match op {
                    Op::Open(id) => { reg.open(id); },
                    Op::Close(id) => { reg.close(id); },
                    Op::Focus(id) => { reg.focus(id); },
                }
                // No duplicates.
                for id in reg.open_apps() {
                    prop_assert_eq!(reg.open_apps().iter().filter(|a| *a == id).count(), 1);
                }
                // Focus is a member, and None exactly when empty.
                match reg.focused() {
                    Some(id) => prop_assert!(reg.is_open(id)),
                    None => prop_assert!(reg.is_empty()),
                }
            }
        }
    }
}
