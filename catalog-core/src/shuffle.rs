use rand::seq::SliceRandom;
use rand::Rng;

/// Produces a uniformly random permutation of `0..n`, regenerated on every
/// catalog load. This is the browse order for a category page.
pub fn random_order(n: usize) -> Vec<usize> {
    random_order_with(&mut rand::thread_rng(), n)
}

/// Fisher-Yates shuffle with a caller-supplied generator.
pub fn random_order_with<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn is_a_permutation_for_all_small_n() {
        for n in 0..40 {
            let mut order = random_order(n);
            assert_eq!(order.len(), n);
            order.sort_unstable();
            assert_eq!(order, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn is_not_biased_toward_a_fixed_order() {
        // Over many trials of n=6 the identity order must not dominate.
        // 720 equally likely orders, so 200 trials should yield far fewer
        // than 20 identities and more than one distinct order.
        let identity: Vec<usize> = (0..6).collect();
        let mut identities = 0;
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..200 {
            let order = random_order(6);
            if order == identity {
                identities += 1;
            }
            distinct.insert(order);
        }
        assert!(identities < 20);
        assert!(distinct.len() > 1);
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let a = random_order_with(&mut StdRng::seed_from_u64(7), 25);
        let b = random_order_with(&mut StdRng::seed_from_u64(7), 25);
        assert_eq!(a, b);
    }
}
