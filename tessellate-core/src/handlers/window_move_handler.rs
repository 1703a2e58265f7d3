use super::{Manager, WindowHandle};
use crate::config::Config;
use crate::display_servers::DisplayServer;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// A tile was dropped after a move grab. If it landed on another tile of the monitor under
    /// the pointer the two trade places.
    pub fn window_move_handler(&mut self, handle: &WindowHandle) -> bool {
        if !self.state.tiles.contains(handle) {
            return false;
        }
        let Some((x, y)) = self.display_server.pointer_position() else {
            return false;
        };
        let screens = self.display_server.screens();
        let Some(screen) = screens.iter().find(|s| s.contains_point(x, y)) else {
            return false;
        };
        let windows = self.display_server.windows();
        let workspace = self.display_server.active_workspace();
        let target = self
            .state
            .visible_tiles(&windows, workspace, screen.id)
            .into_iter()
            .filter(|h| h != handle)
            .find(|h| {
                windows
                    .iter()
                    .any(|w| w.handle == *h && w.frame.contains_point(x, y))
            });
        let Some(target) = target else {
            tracing::trace!("Dropped {:?} at ({}, {}), no tile there", handle, x, y);
            return false;
        };
        tracing::debug!("Dropped {:?} on {:?}, swapping", handle, target);
        let bounds = self.config.gap_bounds();
        self.state.tiles.swap_ranks(handle, &target, &bounds)
    }
}
