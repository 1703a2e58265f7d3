use crate::models::{Window, WindowHandle};
use crate::Command;

/// The kind of interactive grab that just ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabOp {
    Moving,
    Resizing,
    Keyboard,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    WindowMapped(Window),
    WindowDestroyed(WindowHandle),
    WindowMinimized(WindowHandle),
    WindowUnminimized(WindowHandle),
    WorkspaceSwitched,
    Restacked,
    GrabOpEnd { handle: WindowHandle, op: GrabOp },
    ConfigChanged,
    SendCommand(Command),
    /// Tiling is being switched off. Every tile is released and the event loop ends.
    Disabled,
}
