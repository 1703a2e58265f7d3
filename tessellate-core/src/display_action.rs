use crate::models::{WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// These are requests from the tiling engine.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// Move and resize a window, un-maximizing it first when asked to.
    MoveResize {
        handle: WindowHandle,
        xyhw: Xyhw,
        unmaximize: bool,
    },

    /// Maximize a window on its monitor.
    Maximize(WindowHandle),

    /// Tell a window that it is to become focused.
    Focus(WindowHandle),
}
