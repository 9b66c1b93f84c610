use super::*;

/// What selecting a menu entry does: open a nested list, or run an action.
#[derive(Clone, Debug)]
enum Entry {
    Submenu(Vec<MenuElement>),
    Action(MenuAction),
}

/// A labelled node in the menu tree.
#[derive(Clone, Debug)]
pub struct MenuElement {
    label: String,
    entry: Entry,
}

impl MenuElement {
    /// A node that opens `subitems` when selected.
    pub fn new_menu(label: impl Into<String>, subitems: Vec<MenuElement>) -> Self {
        Self {
            label: label.into(),
            entry: Entry::Submenu(subitems),
        }
    }

    /// A leaf that runs `action` when selected.
    pub fn new_action(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            entry: Entry::Action(action),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Children of a submenu; `None` for leaves.
    pub fn subitems(&self) -> Option<&[MenuElement]> {
        match &self.entry {
            Entry::Submenu(items) => Some(items),
            Entry::Action(_) => None,
        }
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self.entry, Entry::Submenu(_))
    }

    /// Action of a leaf; submenus have none.
    pub fn action(&self) -> Option<&MenuAction> {
        match &self.entry {
            Entry::Action(action) => Some(action),
            Entry::Submenu(_) => None,
        }
    }
}
