//! Objects (such as windows and tiles) the tiling engine works with.
mod manager;
mod margins;
mod screen;
mod tile;
mod tile_registry;
mod window;
mod window_type;
mod xyhw;

pub use manager::Manager;
pub use margins::Margins;
pub use screen::Screen;
pub use tile::{GapBounds, Rank, Tile};
pub use tile_registry::TileRegistry;
pub use window::Window;
pub use window::WindowHandle;
pub use window_type::WindowType;
pub use xyhw::Xyhw;

pub type MonitorId = usize;
pub type WorkspaceId = usize;
