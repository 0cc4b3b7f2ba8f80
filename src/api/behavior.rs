use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::{ClientPoint, DataGroup, ElementHandle};
use crate::error::{BehaviorError, BehaviorResult};
use crate::interaction::{EventDisposition, InputEvent};
use crate::render::{ClearCatcher, SharedColumns, StyleChannel};

use super::listeners::{ListenerTable, ListenerTarget};
use super::opacity::{OpacityInputs, OpacityTiers, resolve_opacity_tier};
use super::{BehaviorConfig, InteractivityService, SelectionHandler};

/// Per-render inputs of [`DotPlotBehavior::bind`].
///
/// Flags are fixed for the lifetime of one bind.
#[derive(Clone)]
pub struct BehaviorOptions {
    pub columns: SharedColumns,
    pub clear_catcher: ClearCatcher,
    pub interactivity_service: Rc<dyn InteractivityService>,
    pub is_high_contrast_mode: bool,
    pub has_highlight: bool,
}

impl BehaviorOptions {
    #[must_use]
    pub fn new(
        columns: SharedColumns,
        clear_catcher: ClearCatcher,
        interactivity_service: Rc<dyn InteractivityService>,
    ) -> Self {
        Self {
            columns,
            clear_catcher,
            interactivity_service,
            is_high_contrast_mode: false,
            has_highlight: false,
        }
    }

    #[must_use]
    pub fn with_high_contrast_mode(mut self, enabled: bool) -> Self {
        self.is_high_contrast_mode = enabled;
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, has_highlight: bool) -> Self {
        self.has_highlight = has_highlight;
        self
    }
}

impl fmt::Debug for BehaviorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorOptions")
            .field("columns", &self.columns.try_borrow().map(|c| c.len()).ok())
            .field("clear_catcher", &self.clear_catcher)
            .field("is_high_contrast_mode", &self.is_high_contrast_mode)
            .field("has_highlight", &self.has_highlight)
            .finish_non_exhaustive()
    }
}

/// State installed by one bind. Replaced as a unit on rebind.
struct Binding {
    options: BehaviorOptions,
    handler: Box<dyn SelectionHandler>,
    listeners: ListenerTable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Intent {
    Select { multi_select: bool },
    ClearSelection,
    ContextMenu { position: ClientPoint },
}

/// Selection and interaction controller of the dot plot.
///
/// Binds input on rendered columns and on the background clear catcher to a
/// host [`SelectionHandler`], and restyles column opacity when selection or
/// highlight state changes.
#[derive(Default)]
pub struct DotPlotBehavior {
    opacity_tiers: OpacityTiers,
    binding: Option<Binding>,
}

impl fmt::Debug for DotPlotBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotPlotBehavior")
            .field("opacity_tiers", &self.opacity_tiers)
            .field("options", &self.options())
            .finish()
    }
}

impl DotPlotBehavior {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: BehaviorConfig) -> BehaviorResult<Self> {
        Self::new().with_opacity_tiers(config.opacity_tiers)
    }

    pub fn with_opacity_tiers(mut self, tiers: OpacityTiers) -> BehaviorResult<Self> {
        self.opacity_tiers = tiers.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn opacity_tiers(&self) -> OpacityTiers {
        self.opacity_tiers
    }

    /// Installs listeners for the current render, replacing every listener,
    /// handler and flag installed by a previous bind.
    ///
    /// Fails with [`BehaviorError::ColumnsBusy`] when the column selection is
    /// mutably borrowed; the previous binding then stays in place.
    pub fn bind(
        &mut self,
        options: BehaviorOptions,
        selection_handler: Box<dyn SelectionHandler>,
    ) -> BehaviorResult<()> {
        let listeners = {
            let columns = options
                .columns
                .try_borrow()
                .map_err(|_| BehaviorError::ColumnsBusy)?;
            ListenerTable::install(&columns, options.clear_catcher)
        };
        debug!(
            listeners = listeners.listener_count(),
            is_high_contrast_mode = options.is_high_contrast_mode,
            has_highlight = options.has_highlight,
            rebind = self.binding.is_some(),
            "bind dot plot behavior"
        );
        self.binding = Some(Binding {
            options,
            handler: selection_handler,
            listeners,
        });
        Ok(())
    }

    /// Drops all listeners and host references.
    pub fn unbind(&mut self) {
        if self.binding.take().is_some() {
            debug!("unbind dot plot behavior");
        }
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    #[must_use]
    pub fn options(&self) -> Option<&BehaviorOptions> {
        self.binding.as_ref().map(|binding| &binding.options)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.binding
            .as_ref()
            .map_or(0, |binding| binding.listeners.listener_count())
    }

    /// Routes one input event to the selection handler.
    ///
    /// Events on elements the current bind did not install a listener for
    /// return [`EventDisposition::IGNORED`].
    pub fn dispatch(&mut self, event: &InputEvent) -> BehaviorResult<EventDisposition> {
        let binding = self.binding.as_mut().ok_or(BehaviorError::NotBound {
            operation: "dispatch",
        })?;
        let handle = event.target();
        let Some(target) = binding.listeners.resolve(handle, event.kind()) else {
            trace!(%handle, kind = event.kind().dom_name(), "no listener for event");
            return Ok(EventDisposition::IGNORED);
        };
        let Some((intent, disposition)) = resolve_intent(target, event) else {
            trace!(%handle, kind = event.kind().dom_name(), "event passed through");
            return Ok(EventDisposition::IGNORED);
        };

        match target {
            ListenerTarget::ClearCatcher => {
                debug!(?intent, "clear catcher intent");
                match intent {
                    Intent::ClearSelection => binding.handler.handle_clear_selection(),
                    Intent::ContextMenu { position } => {
                        binding.handler.handle_context_menu(None, position);
                    }
                    Intent::Select { .. } => return Ok(EventDisposition::IGNORED),
                }
            }
            ListenerTarget::Column => {
                let Some(group) = column_group(&binding.options.columns, handle)? else {
                    warn!(%handle, "bound column is missing from the column selection");
                    return Ok(EventDisposition::IGNORED);
                };
                debug!(?intent, group = %group.key, "column intent");
                match intent {
                    Intent::Select { multi_select } => {
                        binding.handler.handle_selection(&group, multi_select);
                    }
                    Intent::ContextMenu { position } => {
                        binding.handler.handle_context_menu(Some(&group), position);
                    }
                    Intent::ClearSelection => return Ok(EventDisposition::IGNORED),
                }
            }
        }
        Ok(disposition)
    }

    /// Restyles every bound column for the given chart-wide selection state.
    ///
    /// Writes `fill-opacity`, plus `stroke-opacity` in high contrast mode.
    pub fn render_selection(&self, has_selection: bool) -> BehaviorResult<()> {
        let binding = self.binding.as_ref().ok_or(BehaviorError::NotBound {
            operation: "render_selection",
        })?;
        let has_highlight = binding.options.has_highlight;
        let tiers = self.opacity_tiers;
        let mut columns = binding
            .options
            .columns
            .try_borrow_mut()
            .map_err(|_| BehaviorError::ColumnsBusy)?;

        let value_for = |group: &DataGroup| {
            tiers.value(resolve_opacity_tier(OpacityInputs::for_group(
                group,
                has_selection,
                has_highlight,
            )))
        };
        columns.apply_channel(StyleChannel::FillOpacity, value_for);
        if binding.options.is_high_contrast_mode {
            columns.apply_channel(StyleChannel::StrokeOpacity, value_for);
        }
        trace!(
            columns = columns.len(),
            has_selection,
            has_highlight,
            high_contrast = binding.options.is_high_contrast_mode,
            "render selection"
        );
        Ok(())
    }

    /// Pulls selection state from the bound interactivity service onto the
    /// columns and re-renders opacity from it.
    pub fn sync_selection(&self) -> BehaviorResult<()> {
        let binding = self.binding.as_ref().ok_or(BehaviorError::NotBound {
            operation: "sync_selection",
        })?;
        let service = &binding.options.interactivity_service;
        {
            let mut columns = binding
                .options
                .columns
                .try_borrow_mut()
                .map_err(|_| BehaviorError::ColumnsBusy)?;
            service.apply_selection_state(&mut columns);
        }
        self.render_selection(service.has_selection())
    }
}

fn column_group(columns: &SharedColumns, handle: ElementHandle) -> BehaviorResult<Option<DataGroup>> {
    let columns = columns.try_borrow().map_err(|_| BehaviorError::ColumnsBusy)?;
    Ok(columns.group(handle).cloned())
}

fn resolve_intent(target: ListenerTarget, event: &InputEvent) -> Option<(Intent, EventDisposition)> {
    match (target, event) {
        (ListenerTarget::Column, InputEvent::Click { modifiers, .. }) => Some((
            Intent::Select {
                multi_select: modifiers.is_multi_select(),
            },
            EventDisposition::handled().stop_propagation(),
        )),
        (ListenerTarget::ClearCatcher, InputEvent::Click { .. }) => {
            Some((Intent::ClearSelection, EventDisposition::handled()))
        }
        (ListenerTarget::Column, InputEvent::ContextMenu { position, .. }) => Some((
            Intent::ContextMenu {
                position: *position,
            },
            EventDisposition::handled()
                .prevent_default()
                .stop_propagation(),
        )),
        (ListenerTarget::ClearCatcher, InputEvent::ContextMenu { position, .. }) => Some((
            Intent::ContextMenu {
                position: *position,
            },
            EventDisposition::handled().prevent_default(),
        )),
        (ListenerTarget::Column, InputEvent::KeyDown { code, modifiers, .. })
            if code.is_activation() =>
        {
            Some((
                Intent::Select {
                    multi_select: modifiers.is_multi_select(),
                },
                EventDisposition::handled()
                    .prevent_default()
                    .stop_propagation(),
            ))
        }
        _ => None,
    }
}
