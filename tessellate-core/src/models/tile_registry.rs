//! The single source of truth for which windows are tiled and in what order.
use super::{GapBounds, Margins, Rank, Tile, WindowHandle};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;

/// Owns the tiling metadata of every registered window, keyed by window handle.
#[derive(Debug, Clone)]
pub struct TileRegistry {
    tiles: HashMap<WindowHandle, Tile>,
    next_seq: u64,
    rng: StdRng,
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Registry whose gap generation is driven by the given generator.
    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            tiles: HashMap::new(),
            next_seq: 0,
            rng,
        }
    }

    /// Starts tiling a window at the back of the order. Returns false if already tiled.
    pub fn register(&mut self, handle: WindowHandle) -> bool {
        if self.tiles.contains_key(&handle) {
            return false;
        }
        tracing::debug!("Registering tile {:?}", handle);
        self.tiles.insert(handle, Tile::new(self.next_seq));
        self.next_seq += 1;
        true
    }

    /// Stops tiling a window. Returns false if it was not tiled.
    pub fn unregister(&mut self, handle: &WindowHandle) -> bool {
        let removed = self.tiles.remove(handle).is_some();
        if removed {
            tracing::debug!("Unregistered tile {:?}", handle);
        }
        removed
    }

    #[must_use]
    pub fn get(&self, handle: &WindowHandle) -> Option<&Tile> {
        self.tiles.get(handle)
    }

    #[must_use]
    pub fn contains(&self, handle: &WindowHandle) -> bool {
        self.tiles.contains_key(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Moves a tile to `rank`. A changed rank gets freshly drawn gaps, an unchanged one keeps
    /// its cached gaps. Returns true if the rank changed.
    pub fn set_rank(&mut self, handle: &WindowHandle, rank: Rank, bounds: &GapBounds) -> bool {
        let Some(tile) = self.tiles.get_mut(handle) else {
            return false;
        };
        let changed = tile.rank != rank;
        tile.rank = rank;
        match rank {
            Rank::Last => tile.gaps = None,
            Rank::Assigned(_) if changed || tile.gaps.is_none() => {
                let gaps = Margins::random_between(&bounds.min, &bounds.max, &mut self.rng);
                tracing::trace!("Tile {:?} moved to {:?}, new gaps {:?}", handle, rank, gaps);
                tile.gaps = Some(gaps);
            }
            Rank::Assigned(_) => {}
        }
        changed
    }

    /// Exchanges the ranks of two tiles. Does nothing unless both are tiled and distinct.
    pub fn swap_ranks(&mut self, a: &WindowHandle, b: &WindowHandle, bounds: &GapBounds) -> bool {
        if a == b {
            return false;
        }
        let (Some(rank_a), Some(rank_b)) = (self.rank(a), self.rank(b)) else {
            return false;
        };
        self.set_rank(a, rank_b, bounds);
        self.set_rank(b, rank_a, bounds);
        true
    }

    #[must_use]
    pub fn rank(&self, handle: &WindowHandle) -> Option<Rank> {
        self.tiles.get(handle).map(|tile| tile.rank)
    }

    /// All tiles accepted by `filter`, ordered by rank then by registration order.
    pub fn list<F>(&self, filter: F) -> Vec<(WindowHandle, &Tile)>
    where
        F: Fn(&WindowHandle) -> bool,
    {
        let mut tiles: Vec<(WindowHandle, &Tile)> = self
            .tiles
            .iter()
            .filter(|(handle, _)| filter(handle))
            .map(|(handle, tile)| (*handle, tile))
            .collect();
        tiles.sort_by_key(|(_, tile)| (tile.rank, tile.seq));
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TileRegistry {
        TileRegistry::with_rng(StdRng::seed_from_u64(3))
    }

    fn bounds(min: f32, max: f32) -> GapBounds {
        GapBounds::new(Margins::new(min), Margins::new(max))
    }

    fn ranks(registry: &TileRegistry) -> Vec<(u64, Rank)> {
        registry
            .list(|_| true)
            .into_iter()
            .map(|(h, t)| (h.0, t.rank))
            .collect()
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = registry();
        assert!(registry.register(WindowHandle(1)));
        assert!(!registry.register(WindowHandle(1)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.rank(&WindowHandle(1)), Some(Rank::Last));
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut registry = registry();
        registry.register(WindowHandle(1));
        assert!(registry.unregister(&WindowHandle(1)));
        assert!(!registry.unregister(&WindowHandle(1)));
        assert!(registry.get(&WindowHandle(1)).is_none());
    }

    #[test]
    fn list_sorts_by_rank_then_insertion_order() {
        let mut registry = registry();
        let b = bounds(0.0, 0.0);
        for id in 1..=4 {
            registry.register(WindowHandle(id));
        }
        registry.set_rank(&WindowHandle(3), Rank::Assigned(0), &b);
        registry.set_rank(&WindowHandle(1), Rank::Assigned(1), &b);
        assert_eq!(
            ranks(&registry),
            vec![
                (3, Rank::Assigned(0)),
                (1, Rank::Assigned(1)),
                (2, Rank::Last),
                (4, Rank::Last),
            ]
        );
    }

    #[test]
    fn list_applies_the_filter() {
        let mut registry = registry();
        for id in 1..=4 {
            registry.register(WindowHandle(id));
        }
        let listed: Vec<u64> = registry
            .list(|h| h.0 % 2 == 0)
            .into_iter()
            .map(|(h, _)| h.0)
            .collect();
        assert_eq!(listed, vec![2, 4]);
    }

    #[test]
    fn set_rank_on_unknown_window_is_ignored() {
        let mut registry = registry();
        assert!(!registry.set_rank(&WindowHandle(9), Rank::Assigned(0), &bounds(0.0, 1.0)));
        assert!(registry.is_empty());
    }

    #[test]
    fn gaps_are_kept_while_rank_is_stable() {
        let mut registry = registry();
        let b = bounds(0.0, 50.0);
        registry.register(WindowHandle(1));
        registry.set_rank(&WindowHandle(1), Rank::Assigned(0), &b);
        let first = registry.get(&WindowHandle(1)).and_then(|t| t.gaps);
        assert!(first.is_some());
        assert!(!registry.set_rank(&WindowHandle(1), Rank::Assigned(0), &b));
        let second = registry.get(&WindowHandle(1)).and_then(|t| t.gaps);
        assert_eq!(first, second);
    }

    #[test]
    fn gaps_are_regenerated_on_rank_change() {
        let mut registry = registry();
        let b = bounds(0.0, 1000.0);
        registry.register(WindowHandle(1));
        registry.set_rank(&WindowHandle(1), Rank::Assigned(0), &b);
        let first = registry.get(&WindowHandle(1)).and_then(|t| t.gaps);
        assert!(registry.set_rank(&WindowHandle(1), Rank::Assigned(1), &b));
        let second = registry.get(&WindowHandle(1)).and_then(|t| t.gaps);
        assert_ne!(first, second);
    }

    #[test]
    fn degenerate_gap_bounds_are_deterministic() {
        let mut registry = registry();
        let b = bounds(1.0, 1.0);
        registry.register(WindowHandle(1));
        for rank in 0..10 {
            registry.set_rank(&WindowHandle(1), Rank::Assigned(rank), &b);
            assert_eq!(
                registry.get(&WindowHandle(1)).and_then(|t| t.gaps),
                Some(Margins::new(1.0))
            );
        }
    }

    #[test]
    fn swapping_twice_restores_ranks() {
        let mut registry = registry();
        let b = bounds(0.0, 10.0);
        registry.register(WindowHandle(1));
        registry.register(WindowHandle(2));
        registry.set_rank(&WindowHandle(1), Rank::Assigned(0), &b);
        registry.set_rank(&WindowHandle(2), Rank::Assigned(1), &b);

        assert!(registry.swap_ranks(&WindowHandle(1), &WindowHandle(2), &b));
        assert_eq!(registry.rank(&WindowHandle(1)), Some(Rank::Assigned(1)));
        assert_eq!(registry.rank(&WindowHandle(2)), Some(Rank::Assigned(0)));

        assert!(registry.swap_ranks(&WindowHandle(1), &WindowHandle(2), &b));
        assert_eq!(registry.rank(&WindowHandle(1)), Some(Rank::Assigned(0)));
        assert_eq!(registry.rank(&WindowHandle(2)), Some(Rank::Assigned(1)));
    }

    #[test]
    fn swap_with_stale_or_same_window_is_a_no_op() {
        let mut registry = registry();
        let b = bounds(0.0, 0.0);
        registry.register(WindowHandle(1));
        registry.set_rank(&WindowHandle(1), Rank::Assigned(0), &b);
        assert!(!registry.swap_ranks(&WindowHandle(1), &WindowHandle(2), &b));
        assert!(!registry.swap_ranks(&WindowHandle(1), &WindowHandle(1), &b));
        assert_eq!(registry.rank(&WindowHandle(1)), Some(Rank::Assigned(0)));
    }
}
