use super::{Manager, Window, WindowHandle};
use crate::config::{Config, MinimizePolicy};
use crate::display_servers::DisplayServer;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Starts tiling a newly mapped window if it passes the auto-tile predicate.
    /// Returns true if changes need to be rendered.
    pub fn window_mapped_handler(&mut self, window: &Window) -> bool {
        if !window.is_tileable(&self.config.auto_tile_window_types()) {
            tracing::trace!("Not tiling {:?} ({:?})", window.handle, window.r#type);
            return false;
        }
        self.state.tiles.register(window.handle)
    }

    pub fn window_destroyed_handler(&mut self, handle: &WindowHandle) -> bool {
        self.state.tiles.unregister(handle)
    }

    pub fn window_minimized_handler(&mut self, handle: &WindowHandle) -> bool {
        match self.config.minimize_policy() {
            // Still registered, the refresh leaves it out and closes the hole.
            MinimizePolicy::Retain => self.state.tiles.contains(handle),
            MinimizePolicy::Unregister => self.state.tiles.unregister(handle),
        }
    }

    pub fn window_unminimized_handler(&mut self, handle: &WindowHandle) -> bool {
        match self.config.minimize_policy() {
            MinimizePolicy::Retain => self.state.tiles.contains(handle),
            MinimizePolicy::Unregister => {
                let window = self
                    .display_server
                    .windows()
                    .into_iter()
                    .find(|w| w.handle == *handle);
                window.map_or(false, |window| self.window_mapped_handler(&window))
            }
        }
    }

    /// Tiles the focused window, or stops tiling it if it already is.
    pub fn toggle_tile(&mut self) -> bool {
        let Some(window) = self.focused_window() else {
            tracing::debug!("Nothing focused to toggle");
            return false;
        };
        if !self.state.tiles.unregister(&window.handle) {
            self.state.tiles.register(window.handle);
        }
        true
    }
}
