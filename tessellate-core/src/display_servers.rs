#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::{Screen, Window, WorkspaceId};
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The host environment the engine tiles windows for.
///
/// Everything read through this trait is a snapshot. The engine never holds on to host objects,
/// it asks again on the next event or refresh.
pub trait DisplayServer {
    fn new(config: &impl Config) -> Self;

    /// Every window the host knows about, with its current flags and frame.
    fn windows(&self) -> Vec<Window>;

    fn active_workspace(&self) -> WorkspaceId;

    fn screens(&self) -> Vec<Screen>;

    fn pointer_position(&self) -> Option<(i32, i32)>;

    fn get_next_events(&mut self) -> Vec<DisplayEvent>;

    /// Fire and forget. A host may answer with a follow up event.
    fn execute_action(&mut self, _act: DisplayAction) -> Option<DisplayEvent> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
