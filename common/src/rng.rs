use log::debug;
use rand::prelude::{SeedableRng, StdRng};

/// A fixed seed gives a reproducible search; otherwise the generator is seeded from the OS.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Seeding rng with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = create_rng(Some(7));
        let mut b = create_rng(Some(7));

        let a: Vec<u32> = (0..16).map(|_| a.gen()).collect();
        let b: Vec<u32> = (0..16).map(|_| b.gen()).collect();

        assert_eq!(a, b);
    }
}
