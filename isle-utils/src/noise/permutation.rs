//! Seeded permutation table hashing lattice coordinates to gradient indices.

use crate::random::{Random, Xoroshiro};

/// Number of distinct table values; lattice coordinates wrap every 256 units.
const PERIOD: usize = 256;
/// Total entries: the shuffled block twice, plus one trailing entry.
const TABLE_LEN: usize = PERIOD * 2 + 1;

/// A seeded shuffle of `0..=255`, repeated twice with one trailing entry.
///
/// Layout invariants: entries `0..=255` are a permutation of `0..=255`,
/// entries `256..=511` repeat them elementwise, and entry 512 equals
/// entry 256. Double lookups of the form `p[ii + 1 + p[jj + 1]]` with
/// masked `ii`/`jj` therefore stay in bounds without any wrapping
/// arithmetic in the kernel.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    p: [i32; TABLE_LEN],
}

impl PermutationTable {
    /// Builds the table for a seed.
    ///
    /// The seed fully determines the shuffle: equal seeds yield identical
    /// tables, making a seed a shareable world ID.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_random(&mut Xoroshiro::from_seed(seed))
    }

    /// Builds the table by consuming an existing random source.
    #[must_use]
    pub fn from_random<R: Random>(random: &mut R) -> Self {
        let mut p = [0_i32; TABLE_LEN];

        // Identity permutation over the first block
        for (i, entry) in p.iter_mut().enumerate().take(PERIOD) {
            *entry = i as i32;
        }

        // Fisher-Yates shuffle of the first block
        for i in 0..PERIOD {
            let offset = random.next_i32_bounded((PERIOD - i) as i32) as usize;
            p.swap(i, i + offset);
        }

        // Mirror into the second block; the trailing entry repeats entry
        // 256 so the doubled region can be indexed one past its end.
        p.copy_within(..PERIOD, PERIOD);
        p[TABLE_LEN - 1] = p[PERIOD];

        Self { p }
    }

    /// Looks up the entry at `index`, which must be in `0..=512`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: i32) -> i32 {
        self.p[index as usize]
    }

    /// The raw table contents.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.p
    }
}

#[cfg(test)]
mod tests {
    use super::{PERIOD, PermutationTable, TABLE_LEN};

    #[test]
    fn first_block_is_a_permutation() {
        let table = PermutationTable::new(42);
        let mut seen = [false; PERIOD];
        for &entry in &table.as_slice()[..PERIOD] {
            let entry = usize::try_from(entry).expect("entries are non-negative");
            assert!(entry < PERIOD, "entry {entry} out of range");
            assert!(!seen[entry], "entry {entry} appears twice in the first block");
            seen[entry] = true;
        }
        assert!(seen.iter().all(|&s| s), "some value of 0..=255 is missing");
    }

    #[test]
    fn second_block_mirrors_the_first() {
        let table = PermutationTable::new(42);
        let p = table.as_slice();
        assert_eq!(p.len(), TABLE_LEN);
        for i in 0..PERIOD {
            assert_eq!(p[i + PERIOD], p[i], "mirror mismatch at {i}");
        }
        assert_eq!(p[TABLE_LEN - 1], p[PERIOD]);
    }

    #[test]
    fn same_seed_same_table() {
        let a = PermutationTable::new(42);
        let b = PermutationTable::new(42);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn different_seed_different_table() {
        let a = PermutationTable::new(42);
        let b = PermutationTable::new(43);
        assert_ne!(a.as_slice(), b.as_slice());
    }
}
