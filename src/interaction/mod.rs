use serde::{Deserialize, Serialize};

use crate::core::{ClientPoint, ElementHandle};

/// Keyboard modifier state captured with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        meta: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Additive selection is requested by ctrl, shift or meta. Alt never is.
    #[must_use]
    pub fn is_multi_select(self) -> bool {
        self.ctrl || self.shift || self.meta
    }
}

/// Physical key identity, mirroring the DOM `KeyboardEvent.code` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    Enter,
    Space,
    Other(String),
}

impl KeyCode {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "Enter" => Self::Enter,
            "Space" => Self::Space,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Keys that activate a focused column like a primary click.
    #[must_use]
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    ContextMenu,
    KeyDown,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::ContextMenu => "contextmenu",
            Self::KeyDown => "keydown",
        }
    }
}

/// Raw input delivered by the host input system.
///
/// `Click` carries primary-button clicks only; secondary-button presses are
/// delivered as `ContextMenu`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Click {
        target: ElementHandle,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        position: ClientPoint,
    },
    ContextMenu {
        target: ElementHandle,
        #[serde(default)]
        modifiers: Modifiers,
        position: ClientPoint,
    },
    KeyDown {
        target: ElementHandle,
        code: KeyCode,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

impl InputEvent {
    #[must_use]
    pub fn click(target: ElementHandle, modifiers: Modifiers) -> Self {
        Self::Click {
            target,
            modifiers,
            position: ClientPoint::default(),
        }
    }

    #[must_use]
    pub fn context_menu(target: ElementHandle, x: f64, y: f64) -> Self {
        Self::ContextMenu {
            target,
            modifiers: Modifiers::NONE,
            position: ClientPoint::new(x, y),
        }
    }

    #[must_use]
    pub fn key_down(target: ElementHandle, code: &str, modifiers: Modifiers) -> Self {
        Self::KeyDown {
            target,
            code: KeyCode::from_code(code),
            modifiers,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::ContextMenu { .. } => EventKind::ContextMenu,
            Self::KeyDown { .. } => EventKind::KeyDown,
        }
    }

    #[must_use]
    pub fn target(&self) -> ElementHandle {
        match self {
            Self::Click { target, .. }
            | Self::ContextMenu { target, .. }
            | Self::KeyDown { target, .. } => *target,
        }
    }

    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::Click { modifiers, .. }
            | Self::ContextMenu { modifiers, .. }
            | Self::KeyDown { modifiers, .. } => *modifiers,
        }
    }
}

/// What the behavior did with an event, reported back to the host input system.
///
/// `default_prevented` and `propagation_stopped` correspond to
/// `preventDefault()` and `stopPropagation()` on the DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDisposition {
    pub handled: bool,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventDisposition {
    pub const IGNORED: Self = Self {
        handled: false,
        default_prevented: false,
        propagation_stopped: false,
    };

    #[must_use]
    pub(crate) const fn handled() -> Self {
        Self {
            handled: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    #[must_use]
    pub(crate) const fn prevent_default(mut self) -> Self {
        self.default_prevented = true;
        self
    }

    #[must_use]
    pub(crate) const fn stop_propagation(mut self) -> Self {
        self.propagation_stopped = true;
        self
    }
}
