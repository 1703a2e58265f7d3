use serde::{Deserialize, Serialize};

/// What happens to a tile when its window is minimized.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MinimizePolicy {
    /// Keep the tile registered. It is left out of layout while minimized and comes back to
    /// its previous position.
    #[default]
    Retain,
    /// Drop the tile. Unminimizing a tileable window registers it again at the back.
    Unregister,
}
