//! Window Information
#![allow(clippy::module_name_repetitions)]

use super::WindowType;
use crate::models::{MonitorId, WorkspaceId, Xyhw};
use serde::{Deserialize, Serialize};

/// Opaque, host supplied identity of a window. Stable for the lifetime of the window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u64);

/// Snapshot of a host window, read fresh for every refresh or event.
/// The engine never owns the window, it only refers to it by handle.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Window {
    pub handle: WindowHandle,
    pub transient: Option<WindowHandle>,
    pub r#type: WindowType,
    pub workspace: WorkspaceId,
    pub monitor: MonitorId,
    pub fullscreen: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub focused: bool,
    /// Current on-screen frame.
    pub frame: Xyhw,
}

impl Window {
    #[must_use]
    pub fn new(handle: WindowHandle) -> Self {
        Self {
            handle,
            transient: None,
            r#type: WindowType::Normal,
            workspace: 0,
            monitor: 0,
            fullscreen: false,
            minimized: false,
            maximized: false,
            focused: false,
            frame: Xyhw::default(),
        }
    }

    /// Whether this window takes part in a layout pass, given it is registered.
    #[must_use]
    pub const fn is_visible_tile_candidate(&self) -> bool {
        !self.fullscreen && !self.minimized
    }

    /// Auto-tile predicate: the window type is in the allow-set and the window is
    /// neither transient nor a dialog.
    #[must_use]
    pub fn is_tileable(&self, allowed: &[WindowType]) -> bool {
        self.transient.is_none() && !self.r#type.is_dialog() && allowed.contains(&self.r#type)
    }
}
