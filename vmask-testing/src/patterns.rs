//! Sources of 8-bit mask patterns for tests.

/// Return every 8-bit pattern, in ascending order.
pub fn all_patterns() -> impl Iterator<Item = u8> + Clone {
    0..=u8::MAX
}

/// Return every pair of 8-bit patterns.
pub fn all_pattern_pairs() -> impl Iterator<Item = (u8, u8)> {
    all_patterns().flat_map(|a| all_patterns().map(move |b| (a, b)))
}

/// Return `count` groups of `N` random 8-bit patterns.
///
/// This is used where exhaustive testing is too slow, such as for triples of
/// masks.
pub fn random_patterns<const N: usize>(
    rng: &mut fastrand::Rng,
    count: usize,
) -> impl Iterator<Item = [u8; N]> + '_ {
    (0..count).map(move |_| std::array::from_fn(|_| rng.u8(..)))
}
