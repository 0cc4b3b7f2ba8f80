use crate::core::{ClientPoint, DataGroup};
use crate::render::ColumnSelection;

/// Client coordinates at which the host should open its context menu.
pub type ContextMenuPosition = ClientPoint;

/// Host-owned sink for selection intents.
///
/// The handler is the only mutator of selection state. The behavior never
/// changes selection flags itself, it only forwards what the user asked for.
pub trait SelectionHandler {
    /// Selects `group`. `multi_select` requests additive (toggle) selection.
    fn handle_selection(&mut self, group: &DataGroup, multi_select: bool);

    /// Deselects everything.
    fn handle_clear_selection(&mut self);

    /// Opens the host context menu. `None` targets empty chart space.
    fn handle_context_menu(&mut self, group: Option<&DataGroup>, position: ContextMenuPosition);
}

/// Host service tracking selection across renders.
pub trait InteractivityService {
    /// Whether any data group is currently selected.
    fn has_selection(&self) -> bool;

    /// Writes current selection flags onto the column groups.
    ///
    /// Returns `true` when at least one column ends up selected.
    fn apply_selection_state(&self, columns: &mut ColumnSelection) -> bool;
}
