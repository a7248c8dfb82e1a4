/// The enumerations of all events that come from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The size of the framebuffer has changed, in pixels.
    Resized(u32, u32),
    /// The window has been requested to close.
    Closed,
    /// A key has been pressed.
    KeyDown(Key),
}

/// The keys the harness reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Tab,
    Space,
    Return,

    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Left,
    Up,
    Right,
    Down,
}

impl Key {
    /// Returns the number on a digit key of the main keyboard.
    pub fn digit(self) -> Option<u32> {
        match self {
            Key::Key0 => Some(0),
            Key::Key1 => Some(1),
            Key::Key2 => Some(2),
            Key::Key3 => Some(3),
            Key::Key4 => Some(4),
            Key::Key5 => Some(5),
            Key::Key6 => Some(6),
            Key::Key7 => Some(7),
            Key::Key8 => Some(8),
            Key::Key9 => Some(9),
            _ => None,
        }
    }
}
