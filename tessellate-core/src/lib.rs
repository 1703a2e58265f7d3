//! Automatic tiling engine: tile registry, layouts and the logic that keeps a host's windows
//! arranged.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use command::{Command, ParseCommandError};
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{DisplayEvent, GrabOp};
pub use display_servers::DisplayServer;
pub use handlers::TileTarget;
pub use models::Manager;
pub use models::Window;
pub use state::State;
