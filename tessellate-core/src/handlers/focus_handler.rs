use super::{Manager, WindowHandle};
use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::utils::helpers;

/// Which neighbour of the focused tile a directional command goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileTarget {
    Next,
    Previous,
    First,
}

impl TileTarget {
    /// Neighbour of `current` in rank order. Next and previous wrap around.
    pub fn find(self, tiles: &[WindowHandle], current: WindowHandle) -> Option<WindowHandle> {
        let is_current = |h: &WindowHandle| *h == current;
        match self {
            Self::Next => helpers::relative_find(tiles, is_current, 1, true).copied(),
            Self::Previous => helpers::relative_find(tiles, is_current, -1, true).copied(),
            Self::First => tiles.first().copied(),
        }
    }
}

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Moves focus to a neighbouring tile. Focus changes never need a refresh.
    pub fn focus_tile(&mut self, target: TileTarget) -> bool {
        if let Some((focused, next)) = self.tile_neighbour(target) {
            if next != focused {
                self.state.actions.push_back(DisplayAction::Focus(next));
            }
        }
        false
    }

    /// Exchanges the ranks of the focused tile and its neighbour.
    pub fn swap_tile(&mut self, target: TileTarget) -> bool {
        let Some((focused, other)) = self.tile_neighbour(target) else {
            return false;
        };
        let bounds = self.config.gap_bounds();
        self.state.tiles.swap_ranks(&focused, &other, &bounds)
    }

    /// The focused tile and its neighbour among the tiles sharing its monitor.
    fn tile_neighbour(&self, target: TileTarget) -> Option<(WindowHandle, WindowHandle)> {
        let focused = self.focused_window()?;
        if !self.state.tiles.contains(&focused.handle) {
            tracing::debug!("Focused window {:?} is not tiled", focused.handle);
            return None;
        }
        let windows = self.display_server.windows();
        let workspace = self.display_server.active_workspace();
        let tiles = self
            .state
            .visible_tiles(&windows, workspace, focused.monitor);
        let other = target.find(&tiles, focused.handle)?;
        Some((focused.handle, other))
    }
}
