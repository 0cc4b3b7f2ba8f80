use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataGroup, ElementHandle};

use super::{ElementStyle, HandleAllocator, StyleChannel};

/// Column collection shared between the rendering layer (owner) and the
/// behavior bound to it.
pub type SharedColumns = Rc<RefCell<ColumnSelection>>;

/// One rendered column (group of dots) and the data group it represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnElement {
    pub handle: ElementHandle,
    pub group: DataGroup,
    #[serde(default)]
    pub style: ElementStyle,
}

impl ColumnElement {
    #[must_use]
    pub fn new(handle: ElementHandle, group: DataGroup) -> Self {
        Self {
            handle,
            group,
            style: ElementStyle::default(),
        }
    }
}

/// Background surface of the chart. Input on it targets "nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCatcher {
    pub handle: ElementHandle,
}

impl ClearCatcher {
    #[must_use]
    pub const fn new(handle: ElementHandle) -> Self {
        Self { handle }
    }
}

/// Ordered set of columns produced by one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSelection {
    columns: IndexMap<ElementHandle, ColumnElement>,
}

impl ColumnSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a column set from explicit `(handle, group)` pairs.
    ///
    /// A repeated handle keeps its first position and takes the last group.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ElementHandle, DataGroup)>) -> Self {
        let mut columns = IndexMap::new();
        for (handle, group) in pairs {
            columns.insert(handle, ColumnElement::new(handle, group));
        }
        Self { columns }
    }

    /// Mints a fresh handle for every group.
    #[must_use]
    pub fn from_groups(
        allocator: &mut HandleAllocator,
        groups: impl IntoIterator<Item = DataGroup>,
    ) -> Self {
        Self::from_pairs(
            groups
                .into_iter()
                .map(|group| (allocator.allocate(), group)),
        )
    }

    #[must_use]
    pub fn into_shared(self) -> SharedColumns {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn get(&self, handle: ElementHandle) -> Option<&ColumnElement> {
        self.columns.get(&handle)
    }

    #[must_use]
    pub fn group(&self, handle: ElementHandle) -> Option<&DataGroup> {
        self.get(handle).map(|column| &column.group)
    }

    pub fn group_mut(&mut self, handle: ElementHandle) -> Option<&mut DataGroup> {
        self.columns.get_mut(&handle).map(|column| &mut column.group)
    }

    #[must_use]
    pub fn style(&self, handle: ElementHandle) -> Option<ElementStyle> {
        self.get(handle).map(|column| column.style)
    }

    pub fn handles(&self) -> impl Iterator<Item = ElementHandle> + '_ {
        self.columns.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnElement> {
        self.columns.values()
    }

    pub fn groups_mut(&mut self) -> impl Iterator<Item = &mut DataGroup> {
        self.columns.values_mut().map(|column| &mut column.group)
    }

    /// Writes one style channel on every column, computed from its data group.
    pub fn apply_channel(
        &mut self,
        channel: StyleChannel,
        mut value_for: impl FnMut(&DataGroup) -> f64,
    ) {
        for column in self.columns.values_mut() {
            let value = value_for(&column.group);
            column.style.set_channel(channel, value);
        }
    }
}
