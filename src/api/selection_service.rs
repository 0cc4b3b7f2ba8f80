use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ClientPoint, DataGroup, GroupKey};
use crate::render::ColumnSelection;

use super::{ContextMenuPosition, InteractivityService, SelectionHandler};

/// Context menu request recorded for the host shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuRequest {
    pub group: Option<GroupKey>,
    pub position: ClientPoint,
}

#[derive(Debug, Default)]
struct SelectionModel {
    selected: IndexSet<GroupKey>,
    last_context_menu: Option<ContextMenuRequest>,
}

impl SelectionModel {
    fn select(&mut self, key: &GroupKey, multi_select: bool) {
        if multi_select {
            if !self.selected.shift_remove(key) {
                self.selected.insert(key.clone());
            }
            return;
        }

        let only_this_selected = self.selected.len() == 1 && self.selected.contains(key);
        self.selected.clear();
        if !only_this_selected {
            self.selected.insert(key.clone());
        }
    }
}

/// In-memory selection service.
///
/// Clones share one selection state, so the same service can be handed to a
/// behavior as its [`SelectionHandler`] and as its [`InteractivityService`].
#[derive(Debug, Clone, Default)]
pub struct SelectionService {
    model: Rc<RefCell<SelectionModel>>,
}

impl SelectionService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected keys in selection order.
    #[must_use]
    pub fn selected_keys(&self) -> Vec<GroupKey> {
        self.model.borrow().selected.iter().cloned().collect()
    }

    #[must_use]
    pub fn is_selected(&self, key: &GroupKey) -> bool {
        self.model.borrow().selected.contains(key)
    }

    #[must_use]
    pub fn last_context_menu(&self) -> Option<ContextMenuRequest> {
        self.model.borrow().last_context_menu.clone()
    }
}

impl SelectionHandler for SelectionService {
    fn handle_selection(&mut self, group: &DataGroup, multi_select: bool) {
        let mut model = self.model.borrow_mut();
        model.select(&group.key, multi_select);
        debug!(
            group = %group.key,
            multi_select,
            selected = model.selected.len(),
            "selection changed"
        );
    }

    fn handle_clear_selection(&mut self) {
        let mut model = self.model.borrow_mut();
        if !model.selected.is_empty() {
            debug!(cleared = model.selected.len(), "selection cleared");
        }
        model.selected.clear();
    }

    fn handle_context_menu(&mut self, group: Option<&DataGroup>, position: ContextMenuPosition) {
        self.model.borrow_mut().last_context_menu = Some(ContextMenuRequest {
            group: group.map(|group| group.key.clone()),
            position,
        });
    }
}

impl InteractivityService for SelectionService {
    fn has_selection(&self) -> bool {
        !self.model.borrow().selected.is_empty()
    }

    fn apply_selection_state(&self, columns: &mut ColumnSelection) -> bool {
        let model = self.model.borrow();
        let mut any_selected = false;
        for group in columns.groups_mut() {
            group.selected = model.selected.contains(&group.key);
            any_selected |= group.selected;
        }
        any_selected
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionService;
    use crate::api::{InteractivityService, SelectionHandler};
    use crate::core::{ClientPoint, DataGroup, ElementHandle, GroupKey};
    use crate::render::ColumnSelection;

    fn group(key: &str) -> DataGroup {
        DataGroup::new(key, key.to_uppercase())
    }

    #[test]
    fn single_select_replaces_previous_selection() {
        let mut service = SelectionService::new();
        service.handle_selection(&group("a"), false);
        service.handle_selection(&group("b"), false);
        assert_eq!(service.selected_keys(), vec![GroupKey::from("b")]);
    }

    #[test]
    fn single_select_on_sole_selected_group_clears() {
        let mut service = SelectionService::new();
        service.handle_selection(&group("a"), false);
        service.handle_selection(&group("a"), false);
        assert!(!service.has_selection());
    }

    #[test]
    fn single_select_on_one_of_many_keeps_only_it() {
        let mut service = SelectionService::new();
        service.handle_selection(&group("a"), true);
        service.handle_selection(&group("b"), true);
        service.handle_selection(&group("a"), false);
        assert_eq!(service.selected_keys(), vec![GroupKey::from("a")]);
    }

    #[test]
    fn multi_select_toggles_membership() {
        let mut service = SelectionService::new();
        service.handle_selection(&group("a"), true);
        service.handle_selection(&group("b"), true);
        service.handle_selection(&group("a"), true);
        assert_eq!(service.selected_keys(), vec![GroupKey::from("b")]);
    }

    #[test]
    fn clones_share_state() {
        let mut handler = SelectionService::new();
        let observer = handler.clone();
        handler.handle_selection(&group("a"), false);
        assert!(observer.is_selected(&GroupKey::from("a")));
        handler.handle_clear_selection();
        assert!(!observer.has_selection());
    }

    #[test]
    fn context_menu_request_is_recorded() {
        let mut service = SelectionService::new();
        service.handle_context_menu(None, ClientPoint::new(3.0, 9.0));
        let request = service.last_context_menu().expect("request");
        assert_eq!(request.group, None);
        assert_eq!(request.position, ClientPoint::new(3.0, 9.0));
    }

    #[test]
    fn apply_selection_state_writes_flags_on_columns() {
        let mut service = SelectionService::new();
        service.handle_selection(&group("b"), false);
        let mut columns = ColumnSelection::from_pairs([
            (ElementHandle::from_raw(0), group("a").with_selected(true)),
            (ElementHandle::from_raw(1), group("b")),
        ]);

        assert!(service.apply_selection_state(&mut columns));
        assert!(!columns.group(ElementHandle::from_raw(0)).expect("a").selected);
        assert!(columns.group(ElementHandle::from_raw(1)).expect("b").selected);
    }
}
