use serde::{Deserialize, Serialize};

/// A position in client (screen) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Input events a canvas widget can respond to.
///
/// Positions are client coordinates as delivered by the host's event loop.
/// A double click is delivered by hosts the way browsers do it: two `Click`
/// events followed by one `DoubleClick`.
#[derive(Debug, Clone)]
pub enum Event {
    /// Primary button click.
    Click { position: Point },
    /// Primary button double click.
    DoubleClick { position: Point },
    /// Secondary button click (context menu request).
    ContextMenu { position: Point },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key, modifiers: Modifiers },
}

/// Keyboard keys (simplified set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
