//! Uniform random selection over static content pools.
//!
//! Every random choice the engine makes (reply pools, stories, riddles,
//! acknowledgments) goes through this module so callers can substitute a
//! seeded RNG and assert exact outputs.

use rand::Rng;

/// Pick a random element from a slice.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    pick_with_rng(items, &mut rand::thread_rng())
}

/// Pick with a specific RNG (useful for testing).
pub fn pick_with_rng<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..items.len());
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_empty() {
        let items: Vec<String> = Vec::new();
        assert!(pick(&items).is_none());
    }

    #[test]
    fn test_pick_single() {
        let items = ["only"];
        assert_eq!(pick(&items), Some(&"only"));
    }

    #[test]
    fn test_pick_in_bounds() {
        let items = [1, 2, 3, 4, 5];
        for _ in 0..100 {
            let picked = pick(&items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_seeded_pick_is_deterministic() {
        let items = ["a", "b", "c", "d"];

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(
                pick_with_rng(&items, &mut rng1),
                pick_with_rng(&items, &mut rng2)
            );
        }
    }
}
