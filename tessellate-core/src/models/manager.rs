use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Window;
use crate::state::State;
use crate::DisplayEvent;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub display_server: SERVER,
    pub disable_requested: bool,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    pub fn new(config: C) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::new(&config),
            config,
            display_server,
            disable_requested: false,
        }
    }

    /// Takes over every window the host already shows that passes the auto-tile predicate.
    pub fn startup(&mut self) -> bool {
        let allowed = self.config.auto_tile_window_types();
        let mut adopted = 0;
        for window in self.display_server.windows() {
            if window.is_tileable(&allowed) && self.state.tiles.register(window.handle) {
                adopted += 1;
            }
        }
        tracing::info!("Tiling enabled, adopted {} windows", adopted);
        self.state.refresh.request();
        adopted > 0
    }

    /// Releases every tile. Windows stay where they are.
    pub fn shutdown(&mut self) {
        tracing::info!("Tiling disabled, releasing {} tiles", self.state.tiles.len());
        self.state.tiles.clear();
        self.disable_requested = true;
    }

    /// Runs the pending refresh pass, if any. Returns whether a pass ran.
    pub fn refresh(&mut self) -> bool {
        if !self.state.refresh.begin() {
            return false;
        }
        let windows = self.display_server.windows();
        let screens = self.display_server.screens();
        let workspace = self.display_server.active_workspace();
        self.state
            .arrange(&windows, &screens, workspace, &self.config);
        self.state.refresh.finish();
        true
    }

    /// Hands the queued actions to the display server, collecting any events it answers with.
    pub fn execute_actions(&mut self) -> Vec<DisplayEvent> {
        let mut events = vec![];
        while let Some(act) = self.state.actions.pop_front() {
            if let Some(event) = self.display_server.execute_action(act) {
                events.push(event);
            }
        }
        events
    }

    /// Swaps in a new configuration. Tiles already registered stay registered even if the new
    /// window type filter would no longer pick them.
    pub fn reload_config(&mut self, config: C) -> bool {
        self.config = config;
        self.display_event_handler(DisplayEvent::ConfigChanged)
    }

    pub(crate) fn focused_window(&self) -> Option<Window> {
        let workspace = self.display_server.active_workspace();
        self.display_server
            .windows()
            .into_iter()
            .find(|w| w.focused && w.workspace == workspace)
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::display_servers::MockDisplayServer> {
    pub fn new_test() -> Self {
        Self::new_test_with(crate::config::tests::TestConfig::default())
    }

    /// Test manager with a seeded gap generator so runs are reproducible.
    pub fn new_test_with(config: crate::config::tests::TestConfig) -> Self {
        use rand::SeedableRng;
        let mut manager = Self::new(config);
        manager.state.tiles =
            crate::models::TileRegistry::with_rng(rand::rngs::StdRng::seed_from_u64(0));
        manager.display_server.screens = vec![crate::models::Screen::new(
            0,
            crate::models::Xyhw::new(0, 0, 1000, 800),
        )];
        manager
    }

    /// Shows a window on the mock host and maps it.
    pub fn map_test_window(&mut self, window: Window) -> bool {
        self.display_server.windows.push(window.clone());
        self.display_event_handler(DisplayEvent::WindowMapped(window))
    }

    /// Runs the pending refresh and applies its actions to the mock host.
    pub fn settle(&mut self) -> bool {
        let ran = self.refresh();
        self.execute_actions();
        ran
    }
}
