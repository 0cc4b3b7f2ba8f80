use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::ElementHandle;
use crate::interaction::EventKind;
use crate::render::{ClearCatcher, ColumnSelection};

/// Role of a bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListenerTarget {
    Column,
    ClearCatcher,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TargetListeners {
    target: ListenerTarget,
    kinds: SmallVec<[EventKind; 3]>,
}

/// Event listeners installed by one bind.
///
/// Holds at most one listener per event kind per element; installing the same
/// kind again replaces the earlier listener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct ListenerTable {
    entries: IndexMap<ElementHandle, TargetListeners>,
}

const COLUMN_EVENTS: [EventKind; 3] = [EventKind::Click, EventKind::ContextMenu, EventKind::KeyDown];
const CLEAR_CATCHER_EVENTS: [EventKind; 2] = [EventKind::Click, EventKind::ContextMenu];

impl ListenerTable {
    pub(super) fn install(columns: &ColumnSelection, clear_catcher: ClearCatcher) -> Self {
        let mut table = Self::default();
        for kind in CLEAR_CATCHER_EVENTS {
            table.on(clear_catcher.handle, ListenerTarget::ClearCatcher, kind);
        }
        for handle in columns.handles() {
            for kind in COLUMN_EVENTS {
                table.on(handle, ListenerTarget::Column, kind);
            }
        }
        table
    }

    fn on(&mut self, handle: ElementHandle, target: ListenerTarget, kind: EventKind) {
        let entry = self.entries.entry(handle).or_insert_with(|| TargetListeners {
            target,
            kinds: SmallVec::new(),
        });
        if entry.target != target {
            warn!(
                %handle,
                "element bound as both column and clear catcher; keeping latest role"
            );
            entry.target = target;
        }
        if !entry.kinds.contains(&kind) {
            entry.kinds.push(kind);
        }
    }

    pub(super) fn resolve(&self, handle: ElementHandle, kind: EventKind) -> Option<ListenerTarget> {
        self.entries
            .get(&handle)
            .filter(|entry| entry.kinds.contains(&kind))
            .map(|entry| entry.target)
    }

    pub(super) fn listener_count(&self) -> usize {
        self.entries.values().map(|entry| entry.kinds.len()).sum()
    }
}
