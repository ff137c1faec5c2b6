//! Pointer and keyboard input delivered to the editor.

use kmap_core::models::Position;

/// What a tap landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapTarget {
    Canvas,
    Node(String),
    Edge(String),
}

impl TapTarget {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Canvas => None,
            Self::Node(id) | Self::Edge(id) => Some(id),
        }
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    pub fn with_shift(self) -> Self {
        Self {
            shift: true,
            ..self
        }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorInput {
    Tap {
        target: TapTarget,
        position: Option<Position>,
    },
    /// A drag finished with the node at `position`.
    DragFree { id: String, position: Position },
    KeyDown { key: String, modifiers: Modifiers },
}

impl EditorInput {
    pub fn tap_node(id: impl Into<String>) -> Self {
        Self::Tap {
            target: TapTarget::Node(id.into()),
            position: None,
        }
    }

    pub fn tap_canvas(position: Position) -> Self {
        Self::Tap {
            target: TapTarget::Canvas,
            position: Some(position),
        }
    }

    pub fn key(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::KeyDown {
            key: key.into(),
            modifiers,
        }
    }
}
