//! A rod: one decimal digit as five beads.
//!
//! The rod owns the toggle protocol. Activating or deactivating a bead may
//! drag neighbouring earth beads along so that the active earth beads always
//! form a contiguous run starting at the reckoning bar:
//!
//! - Releasing an active earth bead also releases every active earth bead
//!   farther from the bar.
//! - Pushing an inactive earth bead also pushes every inactive earth bead
//!   closer to the bar.
//! - The heaven bead toggles alone.
//!
//! The digit is kept incrementally in `value` and always equals the sum of
//! the active beads' worths, so it stays in 0..=9.

use super::bead::{Bead, BeadKind};

/// Beads per rod: one heaven plus four earth.
pub const BEADS_PER_ROD: usize = 5;

// =============================================================================
// Rod
// =============================================================================

/// One vertical rod of the abacus.
///
/// Bead slot 0 is the heaven bead; slots 1..=4 are the earth beads in order,
/// slot 1 nearest the reckoning bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rod {
    index: usize,
    value: u8,
    beads: Vec<Bead>,
    disabled: bool,
    invisible: bool,
}

impl Rod {
    /// A fresh rod at the given 1-based position, all beads inactive.
    pub fn new(index: usize) -> Self {
        let beads = vec![
            Bead::heaven(),
            Bead::earth(1),
            Bead::earth(2),
            Bead::earth(3),
            Bead::earth(4),
        ];
        Self {
            index,
            value: 0,
            beads,
            disabled: false,
            invisible: false,
        }
    }

    /// 1-based position, counted from the left edge of the frame.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The digit this rod currently shows (0..=9).
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// All five beads, heaven first.
    #[inline]
    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    /// A single bead by slot (0 = heaven, 1..=4 = earth orders).
    #[inline]
    pub fn bead(&self, slot: usize) -> &Bead {
        &self.beads[slot]
    }

    /// Whether the heaven bead is counted.
    #[inline]
    pub fn heaven_active(&self) -> bool {
        self.beads[0].is_active()
    }

    /// How many earth beads are counted (0..=4).
    pub fn earth_active_count(&self) -> u8 {
        self.beads[1..]
            .iter()
            .filter(|b| b.is_active())
            .count() as u8
    }

    /// Whether the rod ignores pointer input.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the rod is hidden from the scene.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    pub fn set_invisible(&mut self, invisible: bool) {
        self.invisible = invisible;
    }

    /// Toggle the bead in `slot`, cascading earth neighbours as needed.
    ///
    /// Returns the rod's new digit.
    pub fn toggle(&mut self, slot: usize) -> u8 {
        let (kind, order, active) = {
            let b = &self.beads[slot];
            (b.kind(), b.order(), b.is_active())
        };
        match kind {
            BeadKind::Heaven => {
                self.beads[slot].set_active(!active);
                if active {
                    self.value -= 5;
                } else {
                    self.value += 5;
                }
            }
            BeadKind::Earth if active => {
                // Release: this bead and every active bead farther out.
                for b in self.beads.iter_mut() {
                    if b.is_earth() && b.is_active() && b.order() >= order {
                        b.set_active(false);
                        self.value -= 1;
                    }
                }
            }
            BeadKind::Earth => {
                // Push: this bead and every inactive bead closer in.
                for b in self.beads.iter_mut() {
                    if b.is_earth() && !b.is_active() && b.order() <= order {
                        b.set_active(true);
                        self.value += 1;
                    }
                }
            }
        }
        self.value
    }

    /// Release every bead and zero the digit.
    pub fn reset(&mut self) {
        for b in self.beads.iter_mut() {
            b.set_active(false);
        }
        self.value = 0;
    }
}

// =============================================================================
// Tests
// =============================================================================
