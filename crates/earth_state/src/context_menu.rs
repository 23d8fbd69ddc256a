use super::view_state::ViewAction;

/// Icon drawn in front of a menu label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    RotateCw,
}

impl MenuIcon {
    /// ASCII stand-in, the bundled UI font has nothing fancier
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::RotateCw => "(~)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenuEntry {
    pub label: &'static str,
    pub action: ViewAction,
    pub icon: MenuIcon,
}

/// Groups of entries, drawn with a divider between groups
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuModel {
    pub groups: Vec<Vec<ContextMenuEntry>>,
}

impl Default for ContextMenuModel {
    fn default() -> Self {
        Self {
            groups: vec![vec![ContextMenuEntry {
                label: "Reset Camera",
                action: ViewAction::ResetCamera,
                icon: MenuIcon::RotateCw,
            }]],
        }
    }
}

impl ContextMenuModel {
    pub fn entries(&self) -> impl Iterator<Item = &ContextMenuEntry> {
        self.groups.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::ViewState;

    #[test]
    fn test_default_menu() {
        let menu = ContextMenuModel::default();
        assert_eq!(menu.groups.len(), 1);
        let entries: Vec<_> = menu.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Reset Camera");
        assert_eq!(entries[0].icon, MenuIcon::RotateCw);
    }

    #[test]
    fn test_entry_action_resets_anchor() {
        let mut state = ViewState::default();
        state.apply(ViewAction::OpenContextMenu { x: 400.0, y: 300.0 });
        for entry in ContextMenuModel::default().entries() {
            state.apply(entry.action);
        }
        assert_eq!(state.context_menu_anchor, bevy::math::Vec2::ZERO);
    }
}
