use super::{Config, DisplayEvent, Manager};
use crate::display_event::GrabOp;
use crate::display_servers::DisplayServer;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Applies one host event. Mutations happen right away; the refresh they need is only
    /// requested, so a burst of events costs one layout pass.
    /// Returns true if a refresh was requested.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        let needs_refresh = match event {
            DisplayEvent::WindowMapped(window) => self.window_mapped_handler(&window),
            DisplayEvent::WindowDestroyed(handle) => self.window_destroyed_handler(&handle),
            DisplayEvent::WindowMinimized(handle) => self.window_minimized_handler(&handle),
            DisplayEvent::WindowUnminimized(handle) => self.window_unminimized_handler(&handle),

            DisplayEvent::WorkspaceSwitched | DisplayEvent::Restacked => true,

            DisplayEvent::GrabOpEnd {
                handle,
                op: GrabOp::Moving,
            } => self.window_move_handler(&handle),
            DisplayEvent::GrabOpEnd { .. } => false,

            DisplayEvent::ConfigChanged => {
                self.state.layout_manager.load_config(&self.config);
                true
            }

            DisplayEvent::SendCommand(command) => self.command_handler(&command),

            DisplayEvent::Disabled => {
                self.shutdown();
                false
            }
        };
        if needs_refresh {
            self.state.refresh.request();
        }
        needs_refresh
    }
}
