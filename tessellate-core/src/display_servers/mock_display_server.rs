use super::Config;
use super::DisplayAction;
use super::DisplayEvent;
use super::DisplayServer;
use crate::models::{Screen, Window, WindowHandle, WorkspaceId};

use futures::future;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

/// Scripted host for tests. Applies geometry to its own windows so later hit tests see the
/// frames the engine asked for.
#[derive(Clone, Debug, Default)]
pub struct MockDisplayServer {
    pub windows: Vec<Window>,
    pub screens: Vec<Screen>,
    pub workspace: WorkspaceId,
    pub pointer: Option<(i32, i32)>,
    /// Event batches handed out one per read. Mapped windows join `windows` when delivered.
    pub batches: VecDeque<Vec<DisplayEvent>>,
    /// Every action executed so far, in order.
    pub executed: Vec<DisplayAction>,
}

impl MockDisplayServer {
    pub fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.handle == handle)
    }
}

impl DisplayServer for MockDisplayServer {
    fn new(_: &impl Config) -> Self {
        Self {
            screens: vec![Screen::default()],
            ..Self::default()
        }
    }

    fn windows(&self) -> Vec<Window> {
        self.windows.clone()
    }

    fn active_workspace(&self) -> WorkspaceId {
        self.workspace
    }

    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn pointer_position(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        let batch = self.batches.pop_front().unwrap_or_default();
        for event in &batch {
            if let DisplayEvent::WindowMapped(window) = event {
                if self.window_mut(window.handle).is_none() {
                    self.windows.push(window.clone());
                }
            }
        }
        batch
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        self.executed.push(act);
        match act {
            DisplayAction::MoveResize {
                handle,
                xyhw,
                unmaximize,
            } => {
                if let Some(window) = self.window_mut(handle) {
                    window.frame = xyhw;
                    window.maximized = window.maximized && !unmaximize;
                }
            }
            DisplayAction::Maximize(handle) => {
                if let Some(window) = self.window_mut(handle) {
                    window.maximized = true;
                }
            }
            DisplayAction::Focus(handle) => {
                for window in &mut self.windows {
                    window.focused = window.handle == handle;
                }
            }
        }
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        if self.batches.is_empty() {
            Box::pin(future::pending::<()>())
        } else {
            Box::pin(future::ready(()))
        }
    }

    fn flush(&self) {}
}
