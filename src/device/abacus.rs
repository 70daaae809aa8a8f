//! The whole device: an ordered row of rods.

use super::rod::Rod;

/// Upper bound on rod count so the total always fits in a `u64`
/// (19 decimal digits).
pub const MAX_RODS: usize = 19;

// =============================================================================
// Abacus
// =============================================================================

/// A soroban with a fixed number of rods.
///
/// Rod 0 is the leftmost and most significant; the device value is the rods'
/// digits read left to right as one base-10 number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abacus {
    rods: Vec<Rod>,
}

impl Abacus {
    /// A device with `rods` rods, all zero.
    ///
    /// # Panics
    ///
    /// Panics if `rods` is 0 or greater than [`MAX_RODS`].
    pub fn new(rods: usize) -> Self {
        assert!(
            (1..=MAX_RODS).contains(&rods),
            "rod count must be 1..={}, got {}",
            MAX_RODS,
            rods
        );
        Self {
            rods: (1..=rods).map(Rod::new).collect(),
        }
    }

    /// Number of rods.
    #[inline]
    pub fn rod_count(&self) -> usize {
        self.rods.len()
    }

    /// All rods, leftmost first.
    #[inline]
    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    /// A single rod by 0-based position from the left.
    #[inline]
    pub fn rod(&self, index: usize) -> &Rod {
        &self.rods[index]
    }

    /// Mutable access to a rod, for flag configuration.
    #[inline]
    pub fn rod_mut(&mut self, index: usize) -> &mut Rod {
        &mut self.rods[index]
    }

    /// Toggle one bead and return the device's new value.
    ///
    /// `rod` is the 0-based rod position; `slot` is the bead slot within the
    /// rod (0 = heaven, 1..=4 = earth orders).
    pub fn toggle(&mut self, rod: usize, slot: usize) -> u64 {
        self.rods[rod].toggle(slot);
        self.value()
    }

    /// The digits read as one number, leftmost rod most significant.
    pub fn value(&self) -> u64 {
        self.rods
            .iter()
            .fold(0u64, |acc, rod| acc * 10 + u64::from(rod.value()))
    }

    /// Release every bead on every rod.
    pub fn reset(&mut self) {
        for rod in self.rods.iter_mut() {
            rod.reset();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
