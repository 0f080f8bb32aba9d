//! Permutation operators: ordered crossover and swap mutation.
//!
//! Both operators take routes by reference and return a freshly allocated
//! child, so parents in the current population are never touched.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::error::TspError;
use crate::route::Route;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// 1. Pick a half-open segment `[start, end)` with [`random_segment`]
/// 2. Copy parent1's segment to the same positions in the child
/// 3. Fill the remaining positions left to right with parent2's cities in
///    parent2's order, skipping cities already in the child
///
/// # Errors
///
/// [`TspError::CatalogMismatch`] if the parents differ in length.
pub fn order_crossover<R: Rng>(
    parent1: &Route,
    parent2: &Route,
    rng: &mut R,
) -> Result<Route, TspError> {
    let (start, end) = random_segment(parent1.len(), rng);
    ox_with_segment(parent1, parent2, start, end)
}

/// OX with an explicit segment `[start, end)`.
///
/// `start == end` copies nothing and yields parent2's order; `[0, n)`
/// yields parent1 unchanged.
///
/// # Errors
///
/// [`TspError::CatalogMismatch`] if the parents differ in length, and
/// [`TspError::InvalidConfiguration`] if the segment is not within `0..=n`.
///
/// # Examples
///
/// ```
/// use tsp_ga::Route;
/// use tsp_ga::ga::ox_with_segment;
///
/// let p1 = Route::from_indices(vec![0, 1, 2, 3, 4], 5).unwrap();
/// let p2 = Route::from_indices(vec![4, 3, 2, 1, 0], 5).unwrap();
/// let child = ox_with_segment(&p1, &p2, 1, 3).unwrap();
/// assert_eq!(child.indices(), &[4, 1, 2, 3, 0]);
/// ```
pub fn ox_with_segment(
    parent1: &Route,
    parent2: &Route,
    start: usize,
    end: usize,
) -> Result<Route, TspError> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(TspError::CatalogMismatch {
            expected: n,
            found: parent2.len(),
        });
    }
    if start > end || end > n {
        return Err(TspError::InvalidConfiguration(format!(
            "crossover segment [{start}, {end}) out of range for {n} cities"
        )));
    }

    let template = parent1.indices();
    let donor = parent2.indices();
    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut present = vec![false; n];

    for i in start..end {
        child[i] = Some(template[i]);
        present[template[i]] = true;
    }

    // One cursor into the donor for the whole fill; it never rewinds
    let mut cursor = 0;
    for slot in child.iter_mut().filter(|slot| slot.is_none()) {
        while present[donor[cursor]] {
            cursor += 1;
        }
        let city = donor[cursor];
        *slot = Some(city);
        present[city] = true;
    }

    Ok(Route::from_order_unchecked(
        child.into_iter().flatten().collect(),
    ))
}

/// Picks `start` uniformly in `[0, n)` and `end = start + uniform[0, n - start)`.
///
/// The segment may be empty; `end` never reaches `n`. Returns `(0, 0)` for
/// `n == 0`.
pub fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let start = rng.random_range(0..n);
    let end = start + rng.random_range(0..n - start);
    (start, end)
}

// ============================================================================
// Mutation
// ============================================================================

/// Probabilistic swap mutation.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::SwapMutation;
///
/// assert!(SwapMutation::new(0.05).is_ok());
/// assert!(SwapMutation::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMutation {
    rate: f64,
}

impl SwapMutation {
    /// Creates the operator.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfiguration`] if `rate` is outside `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self, TspError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(TspError::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {rate}"
            )));
        }
        Ok(Self { rate })
    }

    /// Probability of a swap per call.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// With probability `rate`, swaps two distinct positions.
    ///
    /// Routes shorter than 2 are returned unchanged.
    pub fn apply<R: Rng>(&self, route: Route, rng: &mut R) -> Route {
        if rng.random::<f64>() < self.rate && route.len() >= 2 {
            let (i, j) = swap_positions(route.len(), rng);
            let mut order = route.into_indices();
            order.swap(i, j);
            Route::from_order_unchecked(order)
        } else {
            route
        }
    }
}

/// Two distinct positions in `[0, n)`: `i` uniform, then `j = i` shifted by
/// a uniform nonzero offset modulo `n`.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn swap_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "swap needs at least 2 positions, got {n}");
    let i = rng.random_range(0..n);
    let j = (i + 1 + rng.random_range(0..n - 1)) % n;
    (i, j)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn route(order: &[usize]) -> Route {
        Route::from_indices(order.to_vec(), order.len()).expect("valid route")
    }

    // ---- OX Crossover ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = route(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let p2 = route(&[7, 6, 5, 4, 3, 2, 1, 0]);

        for _ in 0..200 {
            let child = order_crossover(&p1, &p2, &mut rng).expect("same length");
            assert!(child.is_permutation_of(8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_preserves_segment_positions() {
        let p1 = route(&[3, 0, 4, 1, 2, 5]);
        let p2 = route(&[5, 4, 3, 2, 1, 0]);
        for start in 0..=6 {
            for end in start..=6 {
                let child = ox_with_segment(&p1, &p2, start, end).expect("valid segment");
                assert!(child.is_permutation_of(6));
                assert_eq!(&child.indices()[start..end], &p1.indices()[start..end]);
            }
        }
    }

    #[test]
    fn test_ox_fills_in_donor_order() {
        let p1 = route(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let p2 = route(&[3, 7, 5, 1, 6, 0, 2, 4]);
        let child = ox_with_segment(&p1, &p2, 2, 5).expect("valid segment");
        // Segment 2,3,4 kept; remaining filled with 7,5,1,6,0 in donor order
        assert_eq!(child.indices(), &[7, 5, 2, 3, 4, 1, 6, 0]);
    }

    #[test]
    fn test_ox_empty_segment_copies_donor() {
        let p1 = route(&[0, 1, 2, 3]);
        let p2 = route(&[2, 0, 3, 1]);
        let child = ox_with_segment(&p1, &p2, 2, 2).expect("valid segment");
        assert_eq!(child, p2);
    }

    #[test]
    fn test_ox_full_segment_copies_template() {
        let p1 = route(&[0, 1, 2, 3]);
        let p2 = route(&[2, 0, 3, 1]);
        let child = ox_with_segment(&p1, &p2, 0, 4).expect("valid segment");
        assert_eq!(child, p1);
    }

    #[test]
    fn test_ox_self_crossover() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = route(&[4, 2, 0, 3, 1]);
        for _ in 0..50 {
            let child = order_crossover(&p, &p, &mut rng).expect("same length");
            assert_eq!(child, p);
        }
    }

    #[test]
    fn test_ox_single_city() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = route(&[0]);
        let child = order_crossover(&p, &p, &mut rng).expect("same length");
        assert_eq!(child.indices(), &[0]);
    }

    #[test]
    fn test_ox_rejects_mismatched_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = order_crossover(&route(&[0, 1, 2]), &route(&[0, 1]), &mut rng).unwrap_err();
        assert_eq!(
            err,
            TspError::CatalogMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_ox_rejects_bad_segment() {
        let p = route(&[0, 1, 2]);
        assert!(ox_with_segment(&p, &p, 2, 1).is_err());
        assert!(ox_with_segment(&p, &p, 0, 4).is_err());
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut saw_empty = false;
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
            saw_empty |= start == end;
        }
        assert!(saw_empty, "empty segments should occur");
        assert_eq!(random_segment(1, &mut rng), (0, 0));
    }

    // ---- Swap Mutation ----

    #[test]
    fn test_swap_positions_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..12 {
            for _ in 0..200 {
                let (i, j) = swap_positions(n, &mut rng);
                assert_ne!(i, j);
                assert!(i < n && j < n);
            }
        }
    }

    #[test]
    fn test_mutation_always_swaps_at_rate_one() {
        let mut rng = StdRng::seed_from_u64(8);
        let m = SwapMutation::new(1.0).expect("valid rate");
        let original = route(&[0, 1, 2, 3, 4, 5]);
        for _ in 0..100 {
            let mutated = m.apply(original.clone(), &mut rng);
            assert!(mutated.is_permutation_of(6));
            let changed = original
                .indices()
                .iter()
                .zip(mutated.indices())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 2, "exactly two positions should differ");
        }
    }

    #[test]
    fn test_mutation_never_swaps_at_rate_zero() {
        let mut rng = StdRng::seed_from_u64(8);
        let m = SwapMutation::new(0.0).expect("valid rate");
        let original = route(&[0, 1, 2, 3]);
        for _ in 0..100 {
            assert_eq!(m.apply(original.clone(), &mut rng), original);
        }
    }

    #[test]
    fn test_mutation_rate_is_respected() {
        let mut rng = StdRng::seed_from_u64(21);
        let m = SwapMutation::new(0.3).expect("valid rate");
        let original = route(&[0, 1, 2, 3, 4]);
        let n = 10000;
        let mutated = (0..n)
            .filter(|_| m.apply(original.clone(), &mut rng) != original)
            .count();
        let share = mutated as f64 / n as f64;
        assert!((share - 0.3).abs() < 0.03, "mutated share {share}");
    }

    #[test]
    fn test_mutation_short_routes_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let m = SwapMutation::new(1.0).expect("valid rate");
        assert_eq!(m.apply(route(&[0]), &mut rng).indices(), &[0]);
    }

    #[test]
    fn test_mutation_rate_validation() {
        assert!(SwapMutation::new(-0.1).is_err());
        assert!(SwapMutation::new(1.1).is_err());
        assert!(SwapMutation::new(f64::NAN).is_err());
        assert!((SwapMutation::new(0.5).expect("valid").rate() - 0.5).abs() < 1e-15);
    }

    // ---- Pipeline ----

    #[test]
    fn test_crossover_then_mutation_preserves_validity() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Route::identity(20);
        let mut rev: Vec<usize> = (0..20).collect();
        rev.reverse();
        let p2 = route(&rev);
        let m = SwapMutation::new(0.5).expect("valid rate");

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng).expect("same length");
            let child = m.apply(child, &mut rng);
            assert!(child.is_permutation_of(20), "pipeline child invalid: {child:?}");
        }
    }
}
