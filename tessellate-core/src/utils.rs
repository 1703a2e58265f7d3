//! Various shared functions the tiling engine uses.
pub mod helpers;
pub mod refresh_scheduler;
