//! Tiling state and the refresh engine.

use crate::config::Config;
use crate::layouts::LayoutManager;
use crate::models::{
    MonitorId, Rank, Screen, Tile, TileRegistry, Window, WindowHandle, WorkspaceId,
};
use crate::utils::refresh_scheduler::RefreshScheduler;
use crate::DisplayAction;
use std::collections::{HashMap, VecDeque};

#[derive(Debug)]
pub struct State {
    pub tiles: TileRegistry,
    pub layout_manager: LayoutManager,
    pub actions: VecDeque<DisplayAction>,
    pub refresh: RefreshScheduler,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            tiles: TileRegistry::new(),
            layout_manager: LayoutManager::new(config),
            actions: VecDeque::new(),
            refresh: RefreshScheduler::default(),
        }
    }

    /// Registered tiles shown on `monitor` of `workspace`, in rank order.
    pub fn visible_tiles(
        &self,
        windows: &[Window],
        workspace: WorkspaceId,
        monitor: MonitorId,
    ) -> Vec<WindowHandle> {
        let shown: HashMap<WindowHandle, &Window> = windows
            .iter()
            .filter(|w| {
                w.workspace == workspace && w.monitor == monitor && w.is_visible_tile_candidate()
            })
            .map(|w| (w.handle, w))
            .collect();
        self.tiles
            .list(|handle| shown.contains_key(handle))
            .into_iter()
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Lays out every monitor and queues the resulting geometry.
    ///
    /// Running this twice without a change in between queues the same geometry twice: ranks
    /// are already in place, so no gaps are drawn again.
    pub fn arrange(
        &mut self,
        windows: &[Window],
        screens: &[Screen],
        workspace: WorkspaceId,
        config: &impl Config,
    ) {
        let Some(layout) = self.layout_manager.layout(config) else {
            tracing::warn!(
                "No usable layout selected ({:?}), skipping refresh",
                self.layout_manager.current_name()
            );
            return;
        };
        let params = config.layout_params();
        let bounds = config.gap_bounds();
        let margins = config.margins();

        for screen in screens {
            let handles = self.visible_tiles(windows, workspace, screen.id);
            if handles.is_empty() {
                continue;
            }
            if handles.len() == 1 && config.maximize_single() {
                tracing::debug!("Maximizing single tile on monitor {}", screen.id);
                self.actions.push_back(DisplayAction::Maximize(handles[0]));
                continue;
            }

            let area = screen.work_area.inset(&margins);
            let rects = layout.arrange(&handles, &area, &params);
            for (rank, (handle, rect)) in handles.iter().zip(rects).enumerate() {
                self.tiles.set_rank(handle, Rank::Assigned(rank), &bounds);
                let gaps = self
                    .tiles
                    .get(handle)
                    .map(Tile::gaps_or_default)
                    .unwrap_or_default();
                self.actions.push_back(DisplayAction::MoveResize {
                    handle: *handle,
                    xyhw: rect.inset(&gaps),
                    unmaximize: true,
                });
            }
            tracing::debug!(
                "Arranged {} tiles on monitor {} using {}",
                handles.len(),
                screen.id,
                layout
            );
        }
    }
}
