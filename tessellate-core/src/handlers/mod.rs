pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod window_handler;
mod window_move_handler;

pub use focus_handler::TileTarget;

use super::command::Command;
use super::config::Config;
use super::models::{Manager, Window, WindowHandle};
use super::DisplayEvent;
