use rand::distr::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Four sided inset. Used for monitor margins, gap bounds and the gaps of a single tile.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn new(size: f32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    /// Draws every side uniformly from `[min, max]` of that side.
    /// A side whose bounds are equal, inverted or not finite is exactly `min`, and a
    /// non-finite `min` counts as zero.
    pub fn random_between<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self {
            top: random_side(min.top, max.top, rng),
            right: random_side(min.right, max.right, rng),
            bottom: random_side(min.bottom, max.bottom, rng),
            left: random_side(min.left, max.left, rng),
        }
    }

    pub fn sides(&self) -> [f32; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

fn random_side<R: Rng + ?Sized>(min: f32, max: f32, rng: &mut R) -> f32 {
    let min = if min.is_finite() { min } else { 0.0 };
    // The width must be finite too, `-3e38..=3e38` overflows f32.
    if !(max.is_finite() && max > min && (max - min).is_finite()) {
        return min;
    }
    Uniform::new_inclusive(min, max).map_or(min, |side| side.sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn degenerate_bounds_always_yield_the_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = Margins::new(1.0);
        for _ in 0..100 {
            let gaps = Margins::random_between(&bound, &bound, &mut rng);
            assert_eq!(gaps, Margins::new(1.0));
        }
    }

    #[test]
    fn random_gaps_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let min = Margins {
            top: 0.0,
            right: 5.0,
            bottom: 10.0,
            left: 2.0,
        };
        let max = Margins {
            top: 4.0,
            right: 6.0,
            bottom: 30.0,
            left: 2.0,
        };
        for _ in 0..500 {
            let gaps = Margins::random_between(&min, &max, &mut rng);
            for ((g, lo), hi) in gaps.sides().iter().zip(min.sides()).zip(max.sides()) {
                assert!(*g >= lo && *g <= hi, "{g} not in [{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn inverted_bounds_fall_back_to_minimum() {
        let mut rng = StdRng::seed_from_u64(1);
        let gaps = Margins::random_between(&Margins::new(8.0), &Margins::new(3.0), &mut rng);
        assert_eq!(gaps, Margins::new(8.0));
    }

    #[test]
    fn non_finite_bounds_fall_back_to_minimum() {
        let mut rng = StdRng::seed_from_u64(1);
        let gaps = Margins::random_between(
            &Margins::new(2.0),
            &Margins::new(f32::INFINITY),
            &mut rng,
        );
        assert_eq!(gaps, Margins::new(2.0));

        let gaps = Margins::random_between(
            &Margins::new(-3e38),
            &Margins::new(3e38),
            &mut rng,
        );
        assert_eq!(gaps, Margins::new(-3e38));

        let min = Margins {
            top: f32::NAN,
            right: f32::NEG_INFINITY,
            ..Margins::new(1.0)
        };
        let gaps = Margins::random_between(&min, &Margins::new(0.0), &mut rng);
        let expected = Margins {
            top: 0.0,
            right: 0.0,
            ..Margins::new(1.0)
        };
        assert_eq!(gaps, expected);
    }
}
